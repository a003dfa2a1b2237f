//! Take the next batch off the front of the candidate list

use super::filter::HospitalCandidate;

/// The hospitals selected for this run and the counts reported around them
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub hospitals: Vec<HospitalCandidate>,
    /// Candidates that passed the filter, including those not selected
    pub total_candidates: usize,
}

impl Batch {
    /// Keep the first `batch_size` candidates, preserving order
    pub fn select(mut candidates: Vec<HospitalCandidate>, batch_size: usize) -> Self {
        let total_candidates = candidates.len();
        candidates.truncate(batch_size);
        Self {
            hospitals: candidates,
            total_candidates,
        }
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }

    /// Candidates left for later runs
    pub fn remaining(&self) -> usize {
        self.total_candidates - self.hospitals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    fn candidates(facs: &[i64]) -> Vec<HospitalCandidate> {
        facs.iter()
            .enumerate()
            .map(|(idx, fac)| HospitalCandidate {
                row: idx + 2,
                fac: *fac,
                hospital: Data::String(format!("Hospital {}", fac)),
            })
            .collect()
    }

    #[test]
    fn test_select_takes_prefix() {
        let batch = Batch::select(candidates(&[4, 9, 1, 7]), 2);
        let facs: Vec<_> = batch.hospitals.iter().map(|h| h.fac).collect();
        assert_eq!(facs, vec![4, 9]);
        assert_eq!(batch.total_candidates, 4);
        assert_eq!(batch.remaining(), 2);
    }

    #[test]
    fn test_select_fewer_than_batch_size() {
        let batch = Batch::select(candidates(&[4, 9]), 30);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.remaining(), 0);
    }

    #[test]
    fn test_select_zero_batch_size() {
        let batch = Batch::select(candidates(&[4, 9]), 0);
        assert!(batch.is_empty());
        assert_eq!(batch.remaining(), 2);
    }

    #[test]
    fn test_select_empty() {
        let batch = Batch::select(Vec::new(), 30);
        assert!(batch.is_empty());
        assert_eq!(batch.remaining(), 0);
    }
}
