use crate::table::{Table, TableError, Value};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitPolicy {
    #[default]
    Top5,
    Top10,
    All,
}

impl LimitPolicy {
    pub const OPTIONS: [LimitPolicy; 3] = [LimitPolicy::Top5, LimitPolicy::Top10, LimitPolicy::All];

    pub fn limit(self) -> Option<usize> {
        match self {
            LimitPolicy::Top5 => Some(5),
            LimitPolicy::Top10 => Some(10),
            LimitPolicy::All => None,
        }
    }

    pub fn label(self, noun: &str) -> String {
        match self.limit() {
            Some(n) => format!("Top {n} {noun}"),
            None => {
                let mut chars = noun.chars();
                match chars.next() {
                    Some(first) => format!("All {}{}", first.to_uppercase(), chars.as_str()),
                    None => "All".to_string(),
                }
            }
        }
    }
}

// Ties keep their original row order.
pub fn rank(
    table: &Table,
    metric: &str,
    policy: LimitPolicy,
    group_by: Option<&str>,
) -> Result<Table, TableError> {
    table.column_index(metric)?;

    let sorted = match group_by {
        Some(key) => sort_desc(&group_sum(table, key)?, metric)?,
        None => sort_desc(table, metric)?,
    };

    let mut rows = sorted.into_rows();
    if let Some(limit) = policy.limit() {
        rows.truncate(limit);
    }
    Ok(table.with_rows(rows))
}

pub fn sort_desc(table: &Table, column: &str) -> Result<Table, TableError> {
    let idx = table.column_index(column)?;
    let mut rows = table.rows().to_vec();
    rows.sort_by(|a, b| a[idx].cmp_desc(&b[idx]));
    Ok(table.with_rows(rows))
}

pub fn group_sum(table: &Table, key: &str) -> Result<Table, TableError> {
    let key_idx = table.column_index(key)?;
    let mut groups: Vec<Vec<Value>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in table.rows() {
        let group_key = row[key_idx].to_string();
        match positions.get(&group_key) {
            Some(&pos) => {
                let group = &mut groups[pos];
                for (idx, cell) in row.iter().enumerate() {
                    if idx != key_idx {
                        group[idx] = combine(&group[idx], cell);
                    }
                }
            }
            None => {
                positions.insert(group_key, groups.len());
                groups.push(row.clone());
            }
        }
    }

    Ok(table.with_rows(groups))
}

fn combine(acc: &Value, next: &Value) -> Value {
    match (acc, next) {
        (acc, Value::Null) => acc.clone(),
        (Value::Null, next) => next.clone(),
        (Value::Int(a), Value::Int(b)) => Value::Int(a.saturating_add(*b)),
        (Value::Text(a), Value::Text(b)) => {
            if b.is_empty() || a.split(", ").any(|part| part == b) {
                Value::Text(a.clone())
            } else {
                Value::Text(format!("{a}, {b}"))
            }
        }
        (a, b) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => Value::Float(a + b),
            _ => Value::Text(format!("{a}, {b}")),
        },
    }
}

pub fn round_counts(table: &Table, column: &str) -> Result<Table, TableError> {
    table.map_column(column, |value| match value {
        Value::Float(value) => Value::Int(value.round() as i64),
        other => other.clone(),
    })
}

pub fn filter_eq(table: &Table, conditions: &[(&str, &str)]) -> Result<Table, TableError> {
    let checks = conditions
        .iter()
        .map(|(column, expected)| Ok((table.column_index(column)?, *expected)))
        .collect::<Result<Vec<_>, TableError>>()?;

    let rows = table
        .rows()
        .iter()
        .filter(|row| {
            checks
                .iter()
                .all(|(idx, expected)| row[*idx].to_string() == *expected)
        })
        .cloned()
        .collect();
    Ok(table.with_rows(rows))
}

pub fn filter_in(table: &Table, column: &str, keys: &[&Value]) -> Result<Table, TableError> {
    let idx = table.column_index(column)?;
    let keys: HashSet<String> = keys.iter().map(|key| key.to_string()).collect();
    let rows = table
        .rows()
        .iter()
        .filter(|row| keys.contains(&row[idx].to_string()))
        .cloned()
        .collect();
    Ok(table.with_rows(rows))
}

pub fn value_counts(
    table: &Table,
    column: &str,
    key_label: &str,
    count_label: &str,
) -> Result<Table, TableError> {
    let idx = table.column_index(column)?;
    let mut counts: Vec<(Value, i64)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in table.rows() {
        let cell = &row[idx];
        if cell.is_null() {
            continue;
        }
        match positions.get(&cell.to_string()) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(cell.to_string(), counts.len());
                counts.push((cell.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let rows = counts
        .into_iter()
        .map(|(value, count)| vec![value, Value::Int(count)])
        .collect();
    Ok(Table::from_rows(
        vec![key_label.to_string(), count_label.to_string()],
        rows,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams(rows: &[(&str, i64)]) -> Table {
        Table::from_rows(
            vec!["Team".to_string(), "Total points".to_string()],
            rows.iter()
                .map(|(team, points)| vec![Value::from(*team), Value::Int(*points)])
                .collect(),
        )
    }

    fn many_teams(n: i64) -> Table {
        let names: Vec<String> = (0..n).map(|i| format!("T{i}")).collect();
        let rows: Vec<(&str, i64)> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), (i as i64 * 7) % 13))
            .collect();
        teams(&rows)
    }

    fn team_names(table: &Table) -> Vec<String> {
        table
            .values("Team")
            .unwrap()
            .into_iter()
            .map(|value| value.to_string())
            .collect()
    }

    #[test]
    fn top_five_of_three_keeps_all_rows_in_order() {
        let table = teams(&[("A", 9), ("B", 12), ("C", 6)]);
        let ranked = rank(&table, "Total points", LimitPolicy::Top5, None).unwrap();
        assert_eq!(team_names(&ranked), ["B", "A", "C"]);
        assert_eq!(ranked.get(0, "Total points"), Some(&Value::Int(12)));
    }

    #[test]
    fn length_follows_limit_policy() {
        for n in [0, 3, 5, 7, 10, 24] {
            let table = many_teams(n);
            for policy in LimitPolicy::OPTIONS {
                let ranked = rank(&table, "Total points", policy, None).unwrap();
                let expected = policy.limit().map_or(n as usize, |l| l.min(n as usize));
                assert_eq!(ranked.len(), expected, "n={n} policy={policy:?}");
            }
        }
    }

    #[test]
    fn output_is_sorted_descending() {
        let ranked = rank(&many_teams(24), "Total points", LimitPolicy::All, None).unwrap();
        let points: Vec<f64> = ranked
            .values("Total points")
            .unwrap()
            .into_iter()
            .map(|value| value.as_f64().unwrap())
            .collect();
        assert!(points.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn ties_keep_original_order() {
        let table = teams(&[("A", 3), ("B", 5), ("C", 3), ("D", 5)]);
        let ranked = rank(&table, "Total points", LimitPolicy::All, None).unwrap();
        assert_eq!(team_names(&ranked), ["B", "D", "A", "C"]);
    }

    #[test]
    fn reranking_is_a_prefix() {
        let table = many_teams(24);
        let top10 = rank(&table, "Total points", LimitPolicy::Top10, None).unwrap();
        let again = rank(&top10, "Total points", LimitPolicy::Top10, None).unwrap();
        assert_eq!(again, top10);
        let top5 = rank(&top10, "Total points", LimitPolicy::Top5, None).unwrap();
        assert_eq!(top5.rows(), &top10.rows()[..5]);
    }

    #[test]
    fn ranking_leaves_source_untouched() {
        let table = teams(&[("A", 9), ("B", 12), ("C", 6)]);
        let before = table.clone();
        rank(&table, "Total points", LimitPolicy::Top5, None).unwrap();
        assert_eq!(table, before);
    }

    #[test]
    fn missing_metric_is_column_not_found() {
        let table = teams(&[("A", 9)]);
        let err = rank(&table, "Goals scored", LimitPolicy::All, None).unwrap_err();
        assert!(matches!(err, TableError::ColumnNotFound(ref c) if c == "Goals scored"));

        let empty = teams(&[]);
        assert!(rank(&empty, "Goals scored", LimitPolicy::Top5, None).is_err());
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let ranked = rank(&teams(&[]), "Total points", LimitPolicy::Top10, None).unwrap();
        assert!(ranked.is_empty());
        assert_eq!(ranked.columns(), ["Team", "Total points"]);
    }

    fn hosts() -> Table {
        Table::from_rows(
            vec![
                "Nation".to_string(),
                "Number of times hosted".to_string(),
                "Year(s)".to_string(),
            ],
            vec![
                vec!["France".into(), Value::Int(1), "1960".into()],
                vec!["Belgium".into(), Value::Float(0.5), "2000".into()],
                vec!["France".into(), Value::Int(1), "1984".into()],
                vec!["Italy".into(), Value::Int(1), "1968".into()],
                vec!["Belgium".into(), Value::Int(1), "1972".into()],
                vec!["France".into(), Value::Int(1), "2016".into()],
            ],
        )
    }

    #[test]
    fn grouping_sums_per_key() {
        let grouped = group_sum(&hosts(), "Nation").unwrap();
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped.get(0, "Nation"), Some(&Value::from("France")));
        assert_eq!(grouped.get(0, "Number of times hosted"), Some(&Value::Int(3)));
        assert_eq!(grouped.get(0, "Year(s)"), Some(&Value::from("1960, 1984, 2016")));
        assert_eq!(
            grouped.get(1, "Number of times hosted"),
            Some(&Value::Float(1.5))
        );
    }

    #[test]
    fn grouped_rank_rounds_counts() {
        let ranked = rank(&hosts(), "Number of times hosted", LimitPolicy::Top5, Some("Nation")).unwrap();
        let rounded = round_counts(&ranked, "Number of times hosted").unwrap();
        let names: Vec<String> = rounded
            .values("Nation")
            .unwrap()
            .into_iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(names, ["France", "Belgium", "Italy"]);
        assert_eq!(rounded.get(1, "Number of times hosted"), Some(&Value::Int(2)));
        assert!(rounded
            .values("Number of times hosted")
            .unwrap()
            .iter()
            .all(|value| matches!(value, Value::Int(_))));
    }

    #[test]
    fn grouping_by_missing_column_fails() {
        let err = rank(&hosts(), "Number of times hosted", LimitPolicy::All, Some("Host")).unwrap_err();
        assert!(matches!(err, TableError::ColumnNotFound(_)));
    }

    fn cards() -> Table {
        Table::from_rows(
            vec![
                "Representing".to_string(),
                "Card Color".to_string(),
                "Round".to_string(),
            ],
            vec![
                vec!["Italy".into(), "Red".into(), "Group stage".into()],
                vec!["Spain".into(), "Two-Yellow".into(), "Group stage".into()],
                vec!["Italy".into(), "Red".into(), "Group stage".into()],
                vec!["France".into(), "Red".into(), "Semi-finals".into()],
            ],
        )
    }

    #[test]
    fn equality_filter_with_no_match_is_empty_not_error() {
        let filtered =
            filter_eq(&cards(), &[("Round", "Final"), ("Card Color", "Red")]).unwrap();
        assert!(filtered.is_empty());
        assert_eq!(filtered.columns(), cards().columns());
    }

    #[test]
    fn equality_filter_matches_all_conditions() {
        let filtered =
            filter_eq(&cards(), &[("Round", "Group stage"), ("Card Color", "Red")]).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn membership_filter_keeps_listed_keys() {
        let keys = [Value::from("France"), Value::from("Spain")];
        let refs: Vec<&Value> = keys.iter().collect();
        let filtered = filter_in(&cards(), "Representing", &refs).unwrap();
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn value_counts_orders_by_frequency() {
        let counts = value_counts(&cards(), "Representing", "Country", "Count").unwrap();
        assert_eq!(counts.columns(), ["Country", "Count"]);
        assert_eq!(counts.get(0, "Country"), Some(&Value::from("Italy")));
        assert_eq!(counts.get(0, "Count"), Some(&Value::Int(2)));
        assert_eq!(counts.get(1, "Country"), Some(&Value::from("Spain")));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn missing_metric_values_rank_last() {
        let mut csv = String::from("Team,Total points\n");
        for i in 0..40 {
            if i % 3 == 0 {
                csv.push_str(&format!("T{i},NaN\n"));
            } else {
                csv.push_str(&format!("T{i},{}.5\n", (i * 7) % 11));
            }
        }
        let table = Table::from_csv(csv.as_bytes()).unwrap();
        let ranked = rank(&table, "Total points", LimitPolicy::All, None).unwrap();
        assert_eq!(ranked.len(), 40);

        let values = ranked.values("Total points").unwrap();
        let (present, missing) = values.split_at(26);
        assert!(present.iter().all(|value| value.as_f64().is_some()));
        assert!(missing.iter().all(|value| value.is_null()));
        let points: Vec<f64> = present.iter().map(|value| value.as_f64().unwrap()).collect();
        assert!(points.windows(2).all(|pair| pair[0] >= pair[1]));
        assert_eq!(ranked.get(26, "Team"), Some(&Value::from("T0")));
    }

    #[test]
    fn nan_cells_built_in_memory_still_rank() {
        let table = Table::from_rows(
            vec!["Team".to_string(), "Total points".to_string()],
            (0..30)
                .map(|i| {
                    let points = if i % 4 == 0 { f64::NAN } else { i as f64 };
                    vec![Value::Text(format!("T{i}")), Value::Float(points)]
                })
                .collect(),
        );
        let ranked = rank(&table, "Total points", LimitPolicy::Top10, None).unwrap();
        assert_eq!(ranked.get(0, "Total points"), Some(&Value::Float(29.0)));
        assert!(ranked
            .values("Total points")
            .unwrap()
            .iter()
            .all(|value| value.as_f64().is_some_and(|v| !v.is_nan())));
    }

    #[test]
    fn counts_round_half_away_from_zero() {
        let table = Table::from_rows(
            vec!["Nation".to_string(), "Number of times hosted".to_string()],
            vec![
                vec!["A".into(), Value::Float(2.5)],
                vec!["B".into(), Value::Float(0.49)],
                vec!["C".into(), Value::Float(1.5)],
                vec!["D".into(), Value::Int(4)],
                vec!["E".into(), Value::Null],
            ],
        );
        let rounded = round_counts(&table, "Number of times hosted").unwrap();
        let counts: Vec<&Value> = rounded.values("Number of times hosted").unwrap();
        assert_eq!(
            counts,
            [&Value::Int(3), &Value::Int(0), &Value::Int(2), &Value::Int(4), &Value::Null]
        );
    }

    #[test]
    fn value_counts_ties_keep_first_appearance() {
        let table = Table::from_rows(
            vec!["Representing".to_string()],
            ["Wales", "Spain", "Greece", "Spain", "Wales", "Poland"]
                .iter()
                .map(|country| vec![Value::from(*country)])
                .collect(),
        );
        let counts = value_counts(&table, "Representing", "Country", "Count").unwrap();
        let countries: Vec<String> = counts
            .values("Country")
            .unwrap()
            .into_iter()
            .map(|value| value.to_string())
            .collect();
        assert_eq!(countries, ["Wales", "Spain", "Greece", "Poland"]);
        assert_eq!(counts.get(0, "Count"), Some(&Value::Int(2)));
        assert_eq!(counts.get(3, "Count"), Some(&Value::Int(1)));
    }

    #[test]
    fn limit_labels_follow_widget_noun() {
        assert_eq!(LimitPolicy::Top5.label("teams"), "Top 5 teams");
        assert_eq!(LimitPolicy::Top10.label("nations"), "Top 10 nations");
        assert_eq!(LimitPolicy::All.label("nations"), "All Nations");
    }
}
