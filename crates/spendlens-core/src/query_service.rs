//! Derived views over a ledger snapshot: filtering, aggregation and option lists.

use std::collections::{BTreeSet, HashMap};

use spendlens_domain::{sum_amounts, ExpenseRecord, PeriodKey};

/// Fixed pastel palette assigned to chart slices by first-occurrence order.
pub const PALETTE: [&str; 10] = [
    "#FADADD", "#B0E0E6", "#FFDAB9", "#E6E6FA", "#C1E1C1", "#FFFACD", "#FFB6C1", "#CDEDF6",
    "#E3F2D6", "#D1ECF1",
];

/// Filter inputs as chosen in the presentation layer. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub month: Option<PeriodKey>,
    pub category: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.month.is_none() && self.category.is_none()
    }

    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        let needle = self.search_text.to_lowercase();
        self.matches_with_needle(record, &needle)
    }

    fn matches_with_needle(&self, record: &ExpenseRecord, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || record.category.to_lowercase().contains(needle)
            || record.note.to_lowercase().contains(needle);
        let matches_month = self.month.map_or(true, |month| record.falls_within(month));
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| record.category == category);
        matches_search && matches_month && matches_category
    }
}

/// A filter hit together with its position in the unfiltered ledger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilteredEntry<'a> {
    pub position: usize,
    pub record: &'a ExpenseRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// One pie-chart slice.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub category: String,
    pub total: f64,
    pub color: &'static str,
    /// Share of the overall total in percent; `0` when the total is `0`.
    pub share: f64,
}

/// Stateless query helpers over [`ExpenseRecord`] slices.
pub struct QueryService;

impl QueryService {
    /// Returns the records matching every criterion, in ledger order.
    pub fn filter<'a>(
        records: &'a [ExpenseRecord],
        criteria: &FilterCriteria,
    ) -> Vec<&'a ExpenseRecord> {
        Self::filter_indexed(records, criteria)
            .into_iter()
            .map(|entry| entry.record)
            .collect()
    }

    /// Like [`QueryService::filter`], keeping each hit's unfiltered position.
    pub fn filter_indexed<'a>(
        records: &'a [ExpenseRecord],
        criteria: &FilterCriteria,
    ) -> Vec<FilteredEntry<'a>> {
        let needle = criteria.search_text.to_lowercase();
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| criteria.matches_with_needle(record, &needle))
            .map(|(position, record)| FilteredEntry { position, record })
            .collect()
    }

    /// Sums amounts per exact category string, in first-occurrence order.
    pub fn sum_by_category<'a, I>(records: I) -> Vec<CategoryTotal>
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        let mut totals: Vec<CategoryTotal> = Vec::new();
        let mut slots: HashMap<&'a str, usize> = HashMap::new();
        for record in records {
            match slots.get(record.category.as_str()) {
                Some(&slot) => totals[slot].total += record.amount,
                None => {
                    slots.insert(record.category.as_str(), totals.len());
                    totals.push(CategoryTotal {
                        category: record.category.clone(),
                        total: record.amount,
                    });
                }
            }
        }
        totals
    }

    pub fn total_of<'a, I>(records: I) -> f64
    where
        I: IntoIterator<Item = &'a ExpenseRecord>,
    {
        sum_amounts(records)
    }

    /// Unique months present in the records, oldest first.
    pub fn distinct_months(records: &[ExpenseRecord]) -> Vec<PeriodKey> {
        records
            .iter()
            .map(ExpenseRecord::period)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Unique category labels, sorted ascending.
    pub fn distinct_categories(records: &[ExpenseRecord]) -> Vec<String> {
        records
            .iter()
            .map(|record| record.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Category totals decorated with palette colors and shares of the total.
    pub fn chart_slices(records: &[ExpenseRecord]) -> Vec<ChartSlice> {
        let overall = Self::total_of(records);
        Self::sum_by_category(records)
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| ChartSlice {
                share: if overall > 0.0 {
                    entry.total / overall * 100.0
                } else {
                    0.0
                },
                color: PALETTE[idx % PALETTE.len()],
                category: entry.category,
                total: entry.total,
            })
            .collect()
    }
}
