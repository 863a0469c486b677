use serde::{Serialize, Deserialize};
use crate::core::types::Occurrence;

/// Occurrences of one keyword, highest frequency first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OccurrenceList {
    pub occurrences: Vec<Occurrence>,
}

impl OccurrenceList {
    pub fn new() -> Self {
        OccurrenceList {
            occurrences: Vec::new(),
        }
    }

    /// Add an occurrence and move it into rank order.
    ///
    /// Returns the midpoints visited by the binary search, `None` when the
    /// list held only the new occurrence.
    pub fn add_occurrence(&mut self, occurrence: Occurrence) -> Option<Vec<usize>> {
        self.occurrences.push(occurrence);
        insert_last_occurrence(&mut self.occurrences)
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Occurrence> {
        self.occurrences.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.occurrences.iter()
    }

    pub fn as_slice(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn total_freq(&self) -> u64 {
        self.occurrences.iter().map(|o| o.frequency as u64).sum()
    }

    /// Frequencies never increase from one entry to the next
    pub fn is_ranked(&self) -> bool {
        self.occurrences.windows(2).all(|w| w[0].frequency >= w[1].frequency)
    }
}

/// Move the last occurrence of `occs` into place.
///
/// `occs[..len-1]` must already be in descending frequency order. The
/// insertion point is found by binary search over that prefix; a search that
/// lands on an equal frequency stops there and the new entry goes in front
/// of it.
///
/// Returns the sequence of midpoints examined, or `None` for a list of one.
pub fn insert_last_occurrence(occs: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    if occs.len() <= 1 {
        return None;
    }

    let target = occs[occs.len() - 1].frequency;
    let mut midpoints = Vec::new();

    // Signed bounds: `high` can step below zero.
    let mut low: isize = 0;
    let mut high: isize = occs.len() as isize - 2;
    let mut mid = 0usize;

    while low <= high {
        mid = ((low + high) / 2) as usize;
        midpoints.push(mid);

        let freq = occs[mid].frequency;
        if freq == target {
            break;
        } else if freq < target {
            high = mid as isize - 1;
        } else {
            low = mid as isize + 1;
        }
    }

    let position = if occs[mid].frequency <= target { mid } else { mid + 1 };

    if let Some(last) = occs.pop() {
        occs.insert(position, last);
    }

    Some(midpoints)
}
