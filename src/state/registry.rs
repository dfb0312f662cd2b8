//! In-memory collection with sequential integer id assignment.

/// Records that carry an optional integer identifier.
pub trait Identified {
    /// Current identifier, if any.
    fn id(&self) -> Option<u32>;
    /// Overwrite the identifier.
    fn assign_id(&mut self, id: u32);
}

/// Ordered collection of records keyed by a registry-assigned id.
///
/// Lookups are linear scans; the first record carrying a given id wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry<T> {
    records: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> Registry<T>
where
    T: Identified + Clone,
{
    /// Wrap records loaded from storage, keeping their order.
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Id the next record without one will receive: `max + 1`, or `1` when empty.
    pub fn next_id(&self) -> u32 {
        self.records
            .iter()
            .filter_map(Identified::id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// Append a record, assigning an id when it carries none. Returns the stored record.
    pub fn create(&mut self, mut record: T) -> T {
        if record.id().is_none() {
            record.assign_id(self.next_id());
        }
        self.records.push(record.clone());
        record
    }

    /// Replace the first record matching `id` wholesale, including its id field.
    ///
    /// Returns `None` when no record matches.
    pub fn update(&mut self, id: u32, record: T) -> Option<T> {
        let slot = self.get_mut(id)?;
        *slot = record.clone();
        Some(record)
    }

    /// Remove every record matching `id`, returning how many were dropped.
    pub fn delete(&mut self, id: u32) -> usize {
        let before = self.records.len();
        self.records.retain(|record| record.id() != Some(id));
        before - self.records.len()
    }

    /// First record stored under `id`.
    pub fn get(&self, id: u32) -> Option<&T> {
        self.records.iter().find(|record| record.id() == Some(id))
    }

    /// Mutable access to the first record stored under `id`.
    pub fn get_mut(&mut self, id: u32) -> Option<&mut T> {
        self.records.iter_mut().find(|record| record.id() == Some(id))
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Owned copy of the collection for persistence or export.
    pub fn snapshot(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
