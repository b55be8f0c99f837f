use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Immutable per-frame result, the sole artifact handed to sinks.
/// Serializes with the field names downstream consumers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub frame: u32,
    pub lane_counts: Vec<u32>,
    pub prioritized_lanes: Vec<u32>,
}

/// Stamps records with a contiguous 1-based frame index. The index counts
/// records produced, never any upstream frame number or timestamp.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    produced: u32,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assemble(&mut self, lane_counts: Vec<u32>, prioritized_lanes: Vec<u32>) -> FrameRecord {
        self.produced += 1;
        FrameRecord {
            frame: self.produced,
            lane_counts,
            prioritized_lanes,
        }
    }
}

/// Caller-owned accumulator of all records in a run, with bulk JSON
/// export. The pipeline never holds on to past records itself.
#[derive(Debug, Default)]
pub struct RecordLog {
    records: Vec<FrameRecord>,
}

impl RecordLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: FrameRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[FrameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the whole run as a pretty-printed JSON array.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_index_starts_at_one_and_is_contiguous() {
        let mut assembler = RecordAssembler::new();
        for expected in 1..=4u32 {
            let record = assembler.assemble(vec![0, 0, 0], vec![]);
            assert_eq!(record.frame, expected);
        }
    }

    #[test]
    fn test_record_snapshot_keeps_inputs() {
        let mut assembler = RecordAssembler::new();
        let record = assembler.assemble(vec![12, 3, 11], vec![1, 3]);
        assert_eq!(record.lane_counts, vec![12, 3, 11]);
        assert_eq!(record.prioritized_lanes, vec![1, 3]);
    }

    #[test]
    fn test_json_field_names() {
        let record = FrameRecord {
            frame: 1,
            lane_counts: vec![2, 0, 1],
            prioritized_lanes: vec![],
        };
        let value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("frame"));
        assert!(obj.contains_key("lane_counts"));
        assert!(obj.contains_key("prioritized_lanes"));
    }

    #[test]
    fn test_log_accumulates_in_order() {
        let mut assembler = RecordAssembler::new();
        let mut log = RecordLog::new();
        log.push(assembler.assemble(vec![1], vec![]));
        log.push(assembler.assemble(vec![3], vec![]));

        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[0].frame, 1);
        assert_eq!(log.records()[1].frame, 2);
    }

    #[test]
    fn test_save_json_round_trips() {
        let mut assembler = RecordAssembler::new();
        let mut log = RecordLog::new();
        log.push(assembler.assemble(vec![12, 3, 11], vec![1, 3]));

        let path = std::env::temp_dir().join("lanewatch_record_log_test.json");
        log.save_json(&path).unwrap();

        let data = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<FrameRecord> = serde_json::from_str(&data).unwrap();
        assert_eq!(parsed, log.records());

        std::fs::remove_file(&path).unwrap();
    }
}
