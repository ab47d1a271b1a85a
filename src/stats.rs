use crate::date_key::DateKey;
use crate::models::{DaySummary, OverallPoint, ProgressPoint, StatsResponse, Task};
use crate::tracker::Tracker;

pub fn build_stats(tracker: &Tracker) -> StatsResponse {
    build_stats_at(DateKey::today(), tracker)
}

pub fn build_stats_at(today: DateKey, tracker: &Tracker) -> StatsResponse {
    let todays = tracker.list_by_day(today);
    let completed_today = todays.iter().filter(|task| task.completed).count();
    let percent = if todays.is_empty() {
        0.0
    } else {
        completed_today as f64 * 100.0 / todays.len() as f64
    };

    let total = tracker.store().len();
    let completed = tracker.store().iter().filter(|task| task.completed).count();
    let completion_rate = if total == 0 {
        0
    } else {
        (completed as f64 * 100.0 / total as f64).round() as u8
    };

    StatsResponse {
        today: ProgressPoint {
            date: today,
            completed: completed_today,
            total: todays.len(),
            percent,
        },
        overall: OverallPoint {
            total,
            completed,
            completion_rate,
        },
    }
}

/// Splits one day's tasks into completed and pending, each in insertion order.
pub fn day_summary(day: DateKey, tracker: &Tracker) -> DaySummary {
    let (completed, pending): (Vec<Task>, Vec<Task>) = tracker
        .list_by_day(day)
        .into_iter()
        .partition(|task| task.completed);

    DaySummary {
        date: day,
        count: tracker.completions_on(day),
        completed,
        pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(raw: &str) -> DateKey {
        raw.parse().unwrap()
    }

    #[test]
    fn empty_tracker_has_zeroed_stats() {
        let stats = build_stats_at(day("2024-06-01"), &Tracker::new());
        assert_eq!(stats.today.total, 0);
        assert_eq!(stats.today.percent, 0.0);
        assert_eq!(stats.overall.total, 0);
        assert_eq!(stats.overall.completion_rate, 0);
    }

    #[test]
    fn stats_split_today_from_overall() {
        let mut tracker = Tracker::new();
        let old = tracker.add_task("old", day("2024-05-31")).unwrap();
        tracker.toggle_complete(old.id).unwrap();
        let a = tracker.add_task("a", day("2024-06-01")).unwrap();
        tracker.add_task("b", day("2024-06-01")).unwrap();
        tracker.toggle_complete(a.id).unwrap();

        let stats = build_stats_at(day("2024-06-01"), &tracker);
        assert_eq!(stats.today.completed, 1);
        assert_eq!(stats.today.total, 2);
        assert_eq!(stats.today.percent, 50.0);
        assert_eq!(stats.overall.total, 3);
        assert_eq!(stats.overall.completed, 2);
        assert_eq!(stats.overall.completion_rate, 67);
    }

    #[test]
    fn day_summary_partitions_tasks() {
        let mut tracker = Tracker::new();
        let a = tracker.add_task("a", day("2024-06-01")).unwrap();
        let b = tracker.add_task("b", day("2024-06-01")).unwrap();
        let c = tracker.add_task("c", day("2024-06-01")).unwrap();
        tracker.add_task("elsewhere", day("2024-06-02")).unwrap();
        tracker.toggle_complete(a.id).unwrap();
        tracker.toggle_complete(c.id).unwrap();

        let summary = day_summary(day("2024-06-01"), &tracker);
        assert_eq!(summary.count, 2);
        let ids = |tasks: &[Task]| tasks.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids(&summary.completed), vec![a.id, c.id]);
        assert_eq!(ids(&summary.pending), vec![b.id]);
    }
}
