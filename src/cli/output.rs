//! Output formatting utilities

use crate::application::{ChildAgeReport, EntryRow};
use crate::domain::{DayStatus, Lifestage, Recap, WeekProgress};
use chrono::{NaiveDate, TimeZone};

const SNIPPET_LEN: usize = 60;

/// Blank column matching a `DD-MM-YYYY` date plus separator
const NO_DATE: &str = "            ";

fn snippet(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    if first_line.chars().count() > SNIPPET_LEN {
        let cut: String = first_line.chars().take(SNIPPET_LEN).collect();
        format!("{}...", cut)
    } else {
        first_line.to_string()
    }
}

fn date_column(day: Option<NaiveDate>) -> String {
    match day {
        Some(day) => format!("{}  ", day.format("%d-%m-%Y")),
        None => NO_DATE.to_string(),
    }
}

fn tag_labels(favorite: bool, milestone: bool) -> String {
    let mut labels = String::new();
    if favorite {
        labels.push_str(" [favorite]");
    }
    if milestone {
        labels.push_str(" [milestone]");
    }
    labels
}

/// Format a list of journal entries for display
pub fn format_entry_list(rows: &[EntryRow]) -> String {
    if rows.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for row in rows {
        let entry = &row.entry;
        output.push_str(&date_column(row.written_on));
        output.push_str(&snippet(&entry.text));
        output.push_str(&tag_labels(entry.is_favorited, entry.is_milestone));
        if let Some(age) = &row.age {
            output.push_str(&format!(" ({})", age));
        }
        output.push('\n');
    }
    output
}

/// Format a list of recaps for display, dating each by its day in `zone`
pub fn format_recap_list<Tz: TimeZone>(recaps: &[Recap], zone: &Tz) -> String {
    if recaps.is_empty() {
        return "No recaps found".to_string();
    }

    let mut output = String::new();
    for recap in recaps {
        let created_on = recap
            .created_at
            .map(|created| created.with_timezone(zone).date_naive());
        output.push_str(&date_column(created_on));
        let kind = format!("{:?}", recap.kind).to_lowercase();
        output.push_str(&format!(
            "{:<8} {}..{}  {}",
            kind,
            recap.period.start_date.format("%d-%m-%Y"),
            recap.period.end_date.format("%d-%m-%Y"),
            snippet(&recap.ai_generated.title)
        ));
        output.push_str(&tag_labels(recap.is_favorited, recap.is_milestone));
        output.push('\n');
    }
    output
}

/// Format the week strip with its totals
pub fn format_week(progress: &WeekProgress) -> String {
    let mut output = format!("Week of {}\n", progress.week_start.format("%d-%m-%Y"));
    for day in &progress.days {
        let mark = match day.status {
            DayStatus::Checked => "[x]",
            DayStatus::Filled => "[*]",
            DayStatus::Empty => "[ ]",
        };
        output.push_str(&format!("{} {}  {}", day.label, day.date.format("%d-%m"), mark));
        if day.is_today {
            output.push_str(" today");
        }
        output.push('\n');
    }
    output.push_str(&format!(
        "Entries: {}  Completed days: {}  Missed days: {}\n",
        progress.total_entries, progress.completed_days, progress.missed_days
    ));
    if progress.skipped_entries > 0 {
        output.push_str(&format!(
            "Skipped {} entries without a valid date\n",
            progress.skipped_entries
        ));
    }
    output
}

/// Format a child's age report
pub fn format_age(report: &ChildAgeReport) -> String {
    let on = report.on.format("%d-%m-%Y");
    if report.age.is_empty() {
        return match report.lifestage {
            Some(Lifestage::Expecting) => format!("{} is not born yet on {}", report.name, on),
            _ => format!("Age of {} is unknown on {}", report.name, on),
        };
    }
    match report.lifestage {
        Some(stage) => format!("{} is {} old on {} ({})", report.name, report.age, on, stage),
        None => format!("{} is {} old on {}", report.name, report.age, on),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute_week_progress, JournalEntry, RecapContent, RecapPeriod, RecapType};
    use chrono::{FixedOffset, Utc};

    fn entry(text: &str, created: Option<(i32, u32, u32)>) -> JournalEntry {
        JournalEntry {
            id: "e".to_string(),
            text: text.to_string(),
            media: Vec::new(),
            is_favorited: false,
            is_milestone: false,
            child_age_at_entry: Default::default(),
            likes: Default::default(),
            created_at: created.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()),
            child_ids: None,
        }
    }

    #[test]
    fn test_format_empty_lists() {
        assert_eq!(format_entry_list(&[]), "No entries found");
        assert_eq!(format_recap_list(&[], &Utc), "No recaps found");
    }

    #[test]
    fn test_format_entry_list() {
        let mut favorite = entry("First steps!\nSecond line", Some((2024, 3, 12)));
        favorite.is_favorited = true;
        favorite.is_milestone = true;
        let rows = vec![
            EntryRow {
                entry: favorite,
                written_on: NaiveDate::from_ymd_opt(2024, 3, 12),
                age: Some("1 year".to_string()),
            },
            EntryRow {
                entry: entry("No date", None),
                written_on: None,
                age: None,
            },
        ];

        let output = format_entry_list(&rows);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "12-03-2024  First steps! [favorite] [milestone] (1 year)");
        assert_eq!(lines[1], "            No date");
    }

    #[test]
    fn test_long_text_is_truncated() {
        let rows = vec![EntryRow {
            entry: entry(&"a".repeat(80), Some((2024, 1, 1))),
            written_on: NaiveDate::from_ymd_opt(2024, 1, 1),
            age: None,
        }];
        let output = format_entry_list(&rows);
        assert!(output.contains(&format!("{}...", "a".repeat(60))));
        assert!(!output.contains(&"a".repeat(61)));
    }

    #[test]
    fn test_format_recap_list() {
        let recap = Recap {
            id: "r1".to_string(),
            user_id: "u1".to_string(),
            child_id: "c1".to_string(),
            kind: RecapType::Monthly,
            period: RecapPeriod::containing(
                RecapType::Monthly,
                NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            ),
            ai_generated: RecapContent {
                title: "February".to_string(),
                ..Default::default()
            },
            highlight_photos: Vec::new(),
            is_favorited: true,
            is_milestone: false,
            created_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()),
            generated_at: None,
        };
        let recaps = [recap];
        assert_eq!(
            format_recap_list(&recaps, &Utc),
            "01-03-2024  monthly  01-02-2024..29-02-2024  February [favorite]\n"
        );

        // 08:00 UTC on 01-03 is still 29-02 at -09:00
        let alaska = FixedOffset::west_opt(9 * 3600).unwrap();
        assert!(format_recap_list(&recaps, &alaska).starts_with("29-02-2024  monthly"));
    }

    #[test]
    fn test_format_week() {
        let now = Utc.with_ymd_and_hms(2024, 3, 13, 12, 0, 0).unwrap();
        let entries = vec![entry("x", Some((2024, 3, 11)))];
        let output = format_week(&compute_week_progress(&entries, &now));
        assert!(output.starts_with("Week of 10-03-2024\n"));
        assert!(output.contains("Mon 11-03  [x]\n"));
        assert!(output.contains("Wed 13-03  [*] today\n"));
        assert!(output.contains("Sat 16-03  [ ]\n"));
        assert!(output.contains("Entries: 1  Completed days: 1  Missed days: 2"));
        assert!(!output.contains("Skipped"));
    }

    #[test]
    fn test_format_age() {
        let on = NaiveDate::from_ymd_opt(2024, 4, 12).unwrap();
        let mut report = ChildAgeReport {
            child_id: "c1".to_string(),
            name: "Ada".to_string(),
            on,
            age: "3 months, 2 days".to_string(),
            lifestage: Some(Lifestage::Infant),
        };
        assert_eq!(
            format_age(&report),
            "Ada is 3 months, 2 days old on 12-04-2024 (infant)"
        );

        report.age.clear();
        report.lifestage = Some(Lifestage::Expecting);
        assert_eq!(format_age(&report), "Ada is not born yet on 12-04-2024");

        report.lifestage = None;
        assert_eq!(format_age(&report), "Age of Ada is unknown on 12-04-2024");
    }
}
