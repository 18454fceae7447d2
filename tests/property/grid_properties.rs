// Property-based tests for grid building and merging
// Random entry lists over the school-day axis must keep the grid invariants

use chrono::NaiveTime;
use classroom_timetable::models::axis::{DayAxis, TimeAxis};
use classroom_timetable::models::grid::GridCell;
use classroom_timetable::models::schedule_entry::ScheduleEntry;
use classroom_timetable::services::grid::{
    build_skeleton, find_merge_runs, resolve_click, ClickResult, TimetableEngine,
};
use classroom_timetable::utils::date::WEEK_DAYS;
use proptest::prelude::*;

const SUBJECTS: [&str; 3] = ["CS101", "MATH11", "PHYS21"];

fn arb_entry(id: i64) -> impl Strategy<Value = ScheduleEntry> {
    let labels = TimeAxis::school_day().labels().to_vec();
    let count = labels.len();
    (0..WEEK_DAYS.len(), 0..count, 0..count, 0..SUBJECTS.len(), any::<bool>()).prop_map(
        move |(day, start, end, subject, free)| {
            ScheduleEntry::builder()
                .id(id)
                .day(WEEK_DAYS[day])
                .slots(labels[start].clone(), labels[end].clone())
                .subject(SUBJECTS[subject])
                .section("A")
                .teacher("Cruz")
                .status(if free { "Free" } else { "Occupied" })
                .build()
                .unwrap()
        },
    )
}

fn arb_entries() -> impl Strategy<Value = Vec<ScheduleEntry>> {
    (0usize..12).prop_flat_map(|len| {
        (0..len)
            .map(|i| arb_entry(i as i64 + 1))
            .collect::<Vec<_>>()
    })
}

proptest! {
    /// Property: an N-slot, D-day skeleton is (N+1) x (D+1) with headers and labels on the edges
    #[test]
    fn prop_skeleton_dimensions(slots in 1usize..=30, days in 1usize..=7) {
        let start = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        let end = start + chrono::Duration::minutes(30 * (slots as i64 - 1));
        let time_axis = TimeAxis::from_window(start, end, 30).unwrap();
        let day_axis = DayAxis::new(&WEEK_DAYS[..days]).unwrap();
        prop_assert_eq!(time_axis.len(), slots);

        let grid = build_skeleton(&time_axis, &day_axis);
        prop_assert_eq!(grid.height(), slots + 1);
        prop_assert_eq!(grid.width(), days + 1);
        prop_assert_eq!(grid.cells().len(), (slots + 1) * (days + 1));

        let corner_is_blank = matches!(
            grid.get(0, 0),
            Some(GridCell::Header { text }) if text.is_empty()
        );
        prop_assert!(corner_is_blank);
        for col in 1..=days {
            let expected = day_axis.header_at(col - 1).unwrap();
            let header_matches = matches!(
                grid.get(0, col),
                Some(GridCell::Header { text }) if *text == expected
            );
            prop_assert!(header_matches);
        }
        for row in 1..=slots {
            let label_matches = matches!(
                grid.get(row, 0),
                Some(GridCell::TimeLabel { label }) if label == &time_axis.labels()[row - 1]
            );
            prop_assert!(label_matches);
            for col in 1..=days {
                prop_assert!(grid.get(row, col).unwrap().is_empty_slot());
            }
        }
    }

    /// Property: a lone valid entry fills exactly end - start cells of its column
    #[test]
    fn prop_single_entry_fills_its_range(entry in arb_entry(1)) {
        let engine = TimetableEngine::default();
        let outcome = engine.build(std::slice::from_ref(&entry), false);
        let axis = engine.time_axis();
        let start = axis.index_of(&entry.start_label).unwrap();
        let end = axis.index_of(&entry.end_label).unwrap();
        let col = engine.day_axis().index_of(&entry.day).unwrap() + 1;

        let expected = end.saturating_sub(start);
        prop_assert_eq!(outcome.grid.occupied_count_in_column(col), expected);
        prop_assert_eq!(outcome.diagnostics.is_empty(), start < end);

        for slot in start..end {
            let cell = outcome.grid.get(slot + 1, col).unwrap().as_occupied().unwrap();
            prop_assert_eq!(cell.entry_id, 1);
            prop_assert_eq!(&cell.time_label, &axis.labels()[slot]);
        }
    }

    /// Property: merge runs partition each column's occupied rows
    #[test]
    fn prop_merge_runs_partition_columns(entries in arb_entries()) {
        let engine = TimetableEngine::default();
        let grid = engine.build(&entries, true).grid;
        let runs = find_merge_runs(&grid);

        for col in 1..grid.width() {
            let covered: usize = runs.iter().filter(|r| r.col == col).map(|r| r.len).sum();
            prop_assert_eq!(covered, grid.occupied_count_in_column(col));
        }

        for run in &runs {
            let head = grid.get(run.start_row, run.col).unwrap().as_occupied().unwrap();
            prop_assert_eq!(head.span_rows, run.len);
            prop_assert!(!head.hidden);
            for row in run.rows().skip(1) {
                let cell = grid.get(row, run.col).unwrap().as_occupied().unwrap();
                prop_assert!(cell.hidden);
                prop_assert_eq!(cell.span_rows, 1);
            }
        }
    }

    /// Property: building twice from the same input yields identical grids
    #[test]
    fn prop_build_is_idempotent(entries in arb_entries(), merge in any::<bool>()) {
        let engine = TimetableEngine::default();
        prop_assert_eq!(engine.build(&entries, merge), engine.build(&entries, merge));
    }

    /// Property: clicks route to the cell's own entry or the skeleton coordinates
    #[test]
    fn prop_clicks_round_trip(entries in arb_entries(), merge in any::<bool>()) {
        let engine = TimetableEngine::default();
        let grid = engine.build(&entries, merge).grid;

        for row in 1..grid.height() {
            for col in 1..grid.width() {
                match (grid.get(row, col).unwrap(), resolve_click(&grid, row, col)) {
                    (GridCell::Occupied(cell), ClickResult::Edit(request)) => {
                        prop_assert_eq!(request.entry_id, cell.entry_id);
                        prop_assert_eq!(&request.time_label, &cell.time_label);
                    }
                    (GridCell::Empty, ClickResult::Create(request)) => {
                        prop_assert_eq!(request.day.as_str(), WEEK_DAYS[col - 1]);
                        prop_assert_eq!(
                            request.time_label.as_str(),
                            engine.time_axis().label_at(row - 1).unwrap()
                        );
                    }
                    (cell, result) => {
                        prop_assert!(false, "cell {:?} routed to {:?}", cell, result);
                    }
                }
            }
        }
    }
}
