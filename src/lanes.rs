use opencv::core::Rect;

/// Ordered table of inclusive (start, end) x-intervals, one per lane,
/// defined in canonical frame coordinates. The table is taken as given:
/// intervals are not validated for order or overlap.
#[derive(Debug, Clone)]
pub struct LaneBoundaries {
    intervals: Vec<(i32, i32)>,
}

impl LaneBoundaries {
    pub fn new(intervals: Vec<(i32, i32)>) -> Self {
        Self { intervals }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn intervals(&self) -> &[(i32, i32)] {
        &self.intervals
    }

    /// Assign an x coordinate to a lane: the first interval in table order
    /// containing it wins, bounds inclusive on both ends. With overlapping
    /// intervals the earlier-indexed lane takes the box; callers rely on
    /// that ordering, so it must not be replaced by a nearest-lane rule.
    pub fn classify(&self, x: i32) -> Option<usize> {
        self.intervals
            .iter()
            .position(|&(start, end)| start <= x && x <= end)
    }

    /// Count boxes per lane by the x of their top-left corner. Boxes that
    /// fall outside every interval are dropped silently.
    pub fn count_boxes(&self, boxes: &[Rect]) -> Vec<u32> {
        let mut counts = vec![0u32; self.intervals.len()];
        for bbox in boxes {
            if let Some(lane) = self.classify(bbox.x) {
                counts[lane] += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_lanes() -> LaneBoundaries {
        LaneBoundaries::new(vec![(0, 300), (300, 600), (600, 900)])
    }

    #[test]
    fn test_box_at_350_lands_in_second_lane() {
        assert_eq!(three_lanes().classify(350), Some(1));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let lanes = three_lanes();
        assert_eq!(lanes.classify(0), Some(0));
        assert_eq!(lanes.classify(600), Some(1));
        assert_eq!(lanes.classify(900), Some(2));
    }

    #[test]
    fn test_shared_edge_goes_to_earlier_lane() {
        // 300 sits in both (0,300) and (300,600); table order breaks the tie
        assert_eq!(three_lanes().classify(300), Some(0));
    }

    #[test]
    fn test_x_outside_every_interval_is_unassigned() {
        let lanes = three_lanes();
        assert_eq!(lanes.classify(-1), None);
        assert_eq!(lanes.classify(901), None);
        assert_eq!(lanes.classify(1050), None);
    }

    #[test]
    fn test_overlapping_intervals_first_match_wins() {
        let lanes = LaneBoundaries::new(vec![(0, 500), (100, 600)]);
        assert_eq!(lanes.classify(300), Some(0));
        assert_eq!(lanes.classify(550), Some(1));
    }

    #[test]
    fn test_unsorted_table_is_scanned_in_order() {
        let lanes = LaneBoundaries::new(vec![(600, 900), (0, 300)]);
        assert_eq!(lanes.classify(650), Some(0));
        assert_eq!(lanes.classify(10), Some(1));
    }

    #[test]
    fn test_counts_cover_every_lane() {
        let lanes = three_lanes();
        let boxes = vec![Rect::new(50, 10, 80, 60), Rect::new(700, 200, 90, 70)];
        assert_eq!(lanes.count_boxes(&boxes), vec![1, 0, 1]);
    }

    #[test]
    fn test_no_boxes_means_all_zero() {
        assert_eq!(three_lanes().count_boxes(&[]), vec![0, 0, 0]);
    }

    #[test]
    fn test_two_boxes_same_lane_count_twice() {
        let lanes = three_lanes();
        let boxes = vec![Rect::new(350, 10, 40, 40), Rect::new(370, 500, 60, 50)];
        assert_eq!(lanes.count_boxes(&boxes), vec![0, 2, 0]);

        // processing order does not matter
        let reversed: Vec<Rect> = boxes.into_iter().rev().collect();
        assert_eq!(lanes.count_boxes(&reversed), vec![0, 2, 0]);
    }

    #[test]
    fn test_unassigned_box_counts_nowhere() {
        let lanes = three_lanes();
        let boxes = vec![Rect::new(1000, 10, 40, 40)];
        assert_eq!(lanes.count_boxes(&boxes), vec![0, 0, 0]);
    }
}
