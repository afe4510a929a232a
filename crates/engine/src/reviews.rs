//! Weekly and monthly review reports keyed by a date label in the file name.
//!
//! The label only decides the calendar range printed in the front matter;
//! the body text of each report is fixed.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::SeedError;
use crate::format::{bullet_list, checkbox_list, format_section, numbered_list};

const WEEKLY_HIGHLIGHTS_TAIL: [&str; 2] = [
    "SURVIBE AI講座の教材アップデートを実施し、受講者質問への回答テンプレも更新。",
    "CursorとClaudeの最新アップデートを検証し、社内メモへ反映した。",
];

const WEEKLY_METRICS: &str = "| 指標 | 今週 | メモ |
|------|------|------|
| Deep Work時間 | 14h | 午前2ブロック確保に成功 |
| コンテンツ公開数 | 2本 | ブログ1/動画1 |
| 学習ログ | 4件 | Claude/Dify/PromptOpsなど |
";

const WEEKLY_LEARNINGS: [&str; 2] = [
    "午前の集中時間にコンテンツづくりを固めると、午後の会議が楽になる。",
    "週後半はエネルギーが下がるため、軽めのメンテ作業を割り当てるとリズムが維持できる。",
];

const WEEKLY_IMPROVEMENTS: [&str; 2] = [
    "Inbox整理を水曜日にも一度実施し、週末の負荷を軽減する。",
    "NotionタスクとObsidianタスクの二重管理をなくすため、連携ルールを明文化する。",
];

const WEEKLY_FOCUS: [&str; 3] = [
    "YouTube EP02の撮影と編集チェックを完了させる。",
    "SURVIBE AIカリキュラムのWeek3演習をブラッシュアップする。",
    "AIツール比較記事のドラフトを水曜までに書き切る。",
];

const WEEKLY_GRATITUDE: [&str; 2] = [
    "チームメンバーがリリースノートのレビューを即日対応してくれた。",
    "コミュニティからCursor活用の質問が届き、改善ヒントを得られた。",
];

const MONTHLY_OUTCOMES: [&str; 3] = [
    "YouTubeチャンネル登録者が月次目標を105%で達成。",
    "SURVIBE AI講座の募集着地が定員に到達し、キャンセル待ちを整理。",
    "AIプロンプト集の第2版を公開し、社内の問い合わせが20%減。",
];

const MONTHLY_METRICS: &str = "| 指標 | 今月 | 先月比 |
|------|------|-------|
| コンテンツ公開数 | 8本 | +2 |
| 売上(万円) | 180 | +15 |
| 学習時間 | 22h | +4 |
";

const MONTHLY_LESSONS: [&str; 2] = [
    "App Router移行に伴うデプロイ体制を早めに整える必要がある。",
    "ニュースレターの開封率が高い金曜朝に合わせて配信すると効果が良い。",
];

const MONTHLY_IMPROVEMENTS: [&str; 2] = [
    "財務レポートの自動生成を整備",
    "コミュニティイベントの運営シートを刷新",
];

const MONTHLY_FOCUS: [&str; 3] = [
    "SURVIBE AI Week4の最終課題を改善し、評価基準をアップデート。",
    "Cursor vs Copilotの記事を深掘りし、リード獲得につなげる。",
    "ヘルスデータの可視化を自動化し、エネルギー管理の精度を上げる。",
];

const MONTHLY_GOOD_NEWS: [&str; 2] = [
    "クライアントから継続案件の相談が2件届いた。",
    "新しい学習仲間がコミュニティに参加し、議論が活性化した。",
];

/// An ISO 8601 week: Monday `start` through Sunday `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRange {
    pub label: String,
    pub iso_year: i32,
    pub week: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    /// Parse `<year>-W<week>`; the week must exist in that ISO year.
    pub fn parse(label: &str) -> Result<Self, SeedError> {
        let invalid = || SeedError::InvalidWeekLabel {
            label: label.to_string(),
        };
        let (year, week) = label.split_once("-W").ok_or_else(invalid)?;
        let iso_year = parse_number::<i32>(year).ok_or_else(invalid)?;
        let week = parse_number::<u32>(week).ok_or_else(invalid)?;
        let start = NaiveDate::from_isoywd_opt(iso_year, week, Weekday::Mon).ok_or_else(invalid)?;
        let end = start.checked_add_days(Days::new(6)).ok_or_else(invalid)?;
        Ok(Self {
            label: label.to_string(),
            iso_year,
            week,
            start,
            end,
        })
    }
}

/// A calendar month: the 1st through its last day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRange {
    pub label: String,
    pub year: i32,
    pub month: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthRange {
    /// Parse `<year>-<month>` with the month in `1..=12`.
    pub fn parse(label: &str) -> Result<Self, SeedError> {
        let invalid = || SeedError::InvalidMonthLabel {
            label: label.to_string(),
        };
        let (year, month) = label.split_once('-').ok_or_else(invalid)?;
        let year = parse_number::<i32>(year).ok_or_else(invalid)?;
        let month = parse_number::<u32>(month).ok_or_else(invalid)?;
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year, 12, 31)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1).and_then(|first| first.pred_opt())
        }
        .ok_or_else(invalid)?;
        Ok(Self {
            label: label.to_string(),
            year,
            month,
            start,
            end,
        })
    }
}

/// ASCII digits only; signs and whitespace are rejected.
fn parse_number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

pub fn render_weekly(range: &WeekRange) -> String {
    let mut highlights = vec![format!(
        "YouTubeシリーズの収録準備を進め、台本レビューを{}件クリアした。",
        range.week
    )];
    highlights.extend(WEEKLY_HIGHLIGHTS_TAIL.iter().map(|item| item.to_string()));

    let mut out = format_section(&format!(
        "---\nweek: {label}\nstart: {start}\nend: {end}\ntags: [weekly-review, {year}, {label}]\n---\n\n# {label} 週次レビュー\n\n## 🌟 ハイライト\n",
        label = range.label,
        start = range.start.format("%Y-%m-%d"),
        end = range.end.format("%Y-%m-%d"),
        year = range.iso_year,
    ));
    out.push_str(&bullet_list(&highlights));
    out.push_str("\n\n");
    out.push_str(&format_section(&format!("## 📊 指標チェック\n{WEEKLY_METRICS}")));
    out.push_str(&format_section(&format!(
        "## 🧠 学びと気づき\n{}",
        bullet_list(&WEEKLY_LEARNINGS)
    )));
    out.push_str(&format_section(&format!(
        "## 🛠 改善アクション\n{}",
        checkbox_list(&WEEKLY_IMPROVEMENTS)
    )));
    out.push_str(&format_section(&format!(
        "## 🎯 来週のフォーカス\n{}",
        numbered_list(&WEEKLY_FOCUS)
    )));
    out.push_str(&format_section(&format!(
        "## 🙌 感謝メモ\n{}",
        bullet_list(&WEEKLY_GRATITUDE)
    )));
    out
}

pub fn render_monthly(range: &MonthRange) -> String {
    let mut out = format_section(&format!(
        "---\nmonth: {label}\nstart: {start}\nend: {end}\ntags: [monthly-review, {year}, {label}]\n---\n\n# {label} 月次レビュー\n\n## ✅ 今月の成果\n",
        label = range.label,
        start = range.start.format("%Y-%m-%d"),
        end = range.end.format("%Y-%m-%d"),
        year = range.year,
    ));
    out.push_str(&bullet_list(&MONTHLY_OUTCOMES));
    out.push_str("\n\n");
    out.push_str(&format_section(&format!("## 📈 主要指標\n{MONTHLY_METRICS}")));
    out.push_str(&format_section(&format!(
        "## 🧠 学び\n{}",
        bullet_list(&MONTHLY_LESSONS)
    )));
    out.push_str(&format_section(&format!(
        "## ⚙️ 改善タスク\n{}",
        checkbox_list(&MONTHLY_IMPROVEMENTS)
    )));
    out.push_str(&format_section(&format!(
        "## 🎯 来月のフォーカス\n{}",
        numbered_list(&MONTHLY_FOCUS)
    )));
    out.push_str(&format_section(&format!(
        "## 🙏 グッドニュース\n{}",
        bullet_list(&MONTHLY_GOOD_NEWS)
    )));
    out
}

/// Parse a weekly label and render its report.
pub fn weekly_review(label: &str) -> Result<String, SeedError> {
    WeekRange::parse(label).map(|range| render_weekly(&range))
}

/// Parse a monthly label and render its report.
pub fn monthly_review(label: &str) -> Result<String, SeedError> {
    MonthRange::parse(label).map(|range| render_monthly(&range))
}

/// Number of ISO weeks in `iso_year` (52 or 53).
pub fn iso_weeks_in_year(iso_year: i32) -> Option<u32> {
    // Dec 28 always falls in the last ISO week of its year.
    NaiveDate::from_ymd_opt(iso_year, 12, 28).map(|date| date.iso_week().week())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_one_of_2025_starts_in_december_2024() {
        let range = WeekRange::parse("2025-W01").unwrap();
        assert_eq!(range.start, date(2024, 12, 30));
        assert_eq!(range.end, date(2025, 1, 5));
        assert_eq!(range.iso_year, 2025);
        assert_eq!(range.week, 1);
    }

    #[test]
    fn week_53_only_in_long_years() {
        assert_eq!(iso_weeks_in_year(2020), Some(53));
        assert_eq!(iso_weeks_in_year(2026), Some(53));
        assert_eq!(iso_weeks_in_year(2025), Some(52));

        let long = WeekRange::parse("2020-W53").unwrap();
        assert_eq!(long.start, date(2020, 12, 28));
        assert_eq!(long.end, date(2021, 1, 3));

        assert!(matches!(
            WeekRange::parse("2025-W53"),
            Err(SeedError::InvalidWeekLabel { .. })
        ));
    }

    #[test]
    fn every_week_spans_monday_to_sunday() {
        for year in [2015, 2020, 2024, 2025, 2026, 2027] {
            let weeks = iso_weeks_in_year(year).unwrap();
            for week in 1..=weeks {
                let range = WeekRange::parse(&format!("{year}-W{week:02}")).unwrap();
                assert_eq!(range.start.weekday(), Weekday::Mon);
                assert_eq!(range.end.weekday(), Weekday::Sun);
                assert_eq!(range.end, range.start + Days::new(6));
                assert_eq!(range.start.iso_week().year(), year);
                assert_eq!(range.start.iso_week().week(), week);
            }
        }
    }

    #[test]
    fn malformed_week_labels() {
        for label in [
            "2025-W00", "2025-W54", "2025-01", "2025W01", "abcd-W01", "2025-Wxx", "2025-W",
            "-W01", "2025-W+1", " 2025-W01",
        ] {
            assert_eq!(
                WeekRange::parse(label),
                Err(SeedError::InvalidWeekLabel {
                    label: label.to_string()
                }),
                "{label} should be rejected"
            );
        }
    }

    #[test]
    fn month_ranges() {
        let december = MonthRange::parse("2024-12").unwrap();
        assert_eq!(december.start, date(2024, 12, 1));
        assert_eq!(december.end, date(2024, 12, 31));

        assert_eq!(MonthRange::parse("2024-02").unwrap().end, date(2024, 2, 29));
        assert_eq!(MonthRange::parse("2025-02").unwrap().end, date(2025, 2, 28));
        assert_eq!(MonthRange::parse("2025-04").unwrap().end, date(2025, 4, 30));

        // December of the last representable year has no following month.
        let last_year = NaiveDate::MAX.year();
        let last = MonthRange::parse(&format!("{last_year}-12")).unwrap();
        assert_eq!(last.end, NaiveDate::MAX);

        for month in 1..=12 {
            let range = MonthRange::parse(&format!("2025-{month:02}")).unwrap();
            assert_eq!(range.start.day(), 1);
            assert_eq!(range.start.month(), month);
            assert_eq!(range.end.month(), month);
            assert_ne!(range.end.succ_opt().unwrap().month(), month);
        }
    }

    #[test]
    fn malformed_month_labels() {
        for label in ["2025-13", "2025-00", "2025", "2025-W01", "2025-1-1", "x-01", "2025-"] {
            assert!(
                matches!(MonthRange::parse(label), Err(SeedError::InvalidMonthLabel { .. })),
                "{label} should be rejected"
            );
        }
    }

    #[test]
    fn weekly_report_shape() {
        let report = weekly_review("2025-W01").unwrap();
        assert!(report.starts_with(
            "---\nweek: 2025-W01\nstart: 2024-12-30\nend: 2025-01-05\ntags: [weekly-review, 2025, 2025-W01]\n---\n\n# 2025-W01 週次レビュー\n\n## 🌟 ハイライト\n- YouTubeシリーズの収録準備を進め、台本レビューを1件クリアした。\n"
        ));
        assert!(report.contains("| 学習ログ | 4件 | Claude/Dify/PromptOpsなど |\n## 🧠 学びと気づき\n"));
        assert!(report.contains("\n1. YouTube EP02の撮影と編集チェックを完了させる。\n"));
        assert!(report.ends_with("コミュニティからCursor活用の質問が届き、改善ヒントを得られた。\n"));
        assert_eq!(report.matches("- [ ] ").count(), 2);
    }

    #[test]
    fn monthly_report_shape() {
        let report = monthly_review("2024-12").unwrap();
        assert!(report.starts_with(
            "---\nmonth: 2024-12\nstart: 2024-12-01\nend: 2024-12-31\ntags: [monthly-review, 2024, 2024-12]\n---\n"
        ));
        assert!(report.contains("## ⚙️ 改善タスク\n- [ ] 財務レポートの自動生成を整備\n"));
        assert!(report.ends_with("議論が活性化した。\n"));
    }
}
