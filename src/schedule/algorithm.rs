use super::category::Category;
use super::model::{Segment, TimelineSchedule, MINUTES_PER_48_HOURS};
use super::time_of_day::{MinuteOfDay, MINUTES_PER_DAY};

/// A half-open range painted with one category before overlap resolution.
#[derive(Debug, Clone, Copy)]
struct PaintedRange {
    start: u16,
    end: u16,
    category: Category,
}

impl PaintedRange {
    fn covers(&self, minute: u16) -> bool {
        self.start <= minute && minute < self.end
    }
}

/// Partition the 48-hour window into sleep/awake/work segments.
///
/// Awake and work intervals are painted for both days; an interval whose end
/// is earlier than its start wraps past midnight and is split in two. Minutes
/// nobody paints are sleep, and overlaps go to the higher-priority category.
/// The result tiles `[0, 2880)` in order with no two neighbours sharing a
/// category.
pub fn compute_schedule_segments(schedule: &TimelineSchedule) -> Vec<Segment> {
    let ranges = painted_ranges(schedule);

    // Every range starts and ends on a boundary, so each slice between two
    // consecutive boundaries is either fully inside a range or fully outside it.
    let mut boundaries: Vec<u16> = ranges
        .iter()
        .flat_map(|range| [range.start, range.end])
        .chain([0, MINUTES_PER_48_HOURS])
        .collect();
    boundaries.sort_unstable();
    boundaries.dedup();

    let mut segments: Vec<Segment> = Vec::with_capacity(boundaries.len());
    for window in boundaries.windows(2) {
        let (start, end) = (window[0], window[1]);
        let category = ranges
            .iter()
            .filter(|range| range.covers(start))
            .map(|range| range.category)
            .max_by_key(|category| category.priority())
            .unwrap_or_default();

        match segments.last_mut() {
            Some(last) if last.category == category => last.end = end,
            _ => segments.push(Segment {
                start,
                end,
                category,
            }),
        }
    }

    segments
}

/// Category covering `minute` of the 48-hour window, if any segment does.
pub fn category_at(segments: &[Segment], minute: u16) -> Option<Category> {
    let idx = segments.partition_point(|segment| segment.end <= minute);
    segments
        .get(idx)
        .filter(|segment| segment.contains(minute))
        .map(|segment| segment.category)
}

/// Whole-window sleep, shown when a schedule cannot be derived.
pub fn fallback_segments() -> Vec<Segment> {
    vec![Segment {
        start: 0,
        end: MINUTES_PER_48_HOURS,
        category: Category::Sleep,
    }]
}

fn painted_ranges(schedule: &TimelineSchedule) -> Vec<PaintedRange> {
    let mut ranges = Vec::with_capacity(8);
    for day in 0..2u16 {
        let base = day * MINUTES_PER_DAY;
        push_daily_range(&mut ranges, base, schedule.wake, schedule.sleep, Category::Awake);
        push_daily_range(
            &mut ranges,
            base,
            schedule.work_start,
            schedule.work_end,
            Category::Work,
        );
    }
    ranges
}

fn push_daily_range(
    ranges: &mut Vec<PaintedRange>,
    base: u16,
    from: MinuteOfDay,
    to: MinuteOfDay,
    category: Category,
) {
    let (from, to) = (from.get(), to.get());
    if to >= from {
        push_range(ranges, base + from, base + to, category);
    } else {
        push_range(ranges, base + from, base + MINUTES_PER_DAY, category);
        push_range(ranges, base, base + to, category);
    }
}

fn push_range(ranges: &mut Vec<PaintedRange>, start: u16, end: u16, category: Category) {
    if start < end {
        ranges.push(PaintedRange {
            start,
            end,
            category,
        });
    }
}
