// src/infrastructure/repositories/filter_sql.rs
//! Renders typed query plans onto a Postgres `QueryBuilder`. Column names
//! come from `FilterField::column`; every value is bound.
use crate::domain::query::{FilterField, FilterValue, OrderBy, Predicate, QueryPlan};
use sqlx::{Postgres, QueryBuilder};

pub(super) fn push_predicates<F: FilterField>(
    builder: &mut QueryBuilder<'_, Postgres>,
    predicates: &[Predicate<F>],
) {
    for (idx, predicate) in predicates.iter().enumerate() {
        builder.push(if idx == 0 { " WHERE " } else { " AND " });
        let column = predicate.field().column();
        match predicate {
            Predicate::Equals { value, .. } => {
                builder.push(column).push(" = ");
                push_value(builder, value);
            }
            Predicate::Range { start, end, .. } => match (start, end) {
                (Some(start), Some(end)) => {
                    builder.push(column).push(" >= ");
                    push_value(builder, start);
                    builder.push(" AND ").push(column).push(" <= ");
                    push_value(builder, end);
                }
                (Some(start), None) => {
                    builder.push(column).push(" >= ");
                    push_value(builder, start);
                }
                (None, Some(end)) => {
                    builder.push(column).push(" <= ");
                    push_value(builder, end);
                }
                (None, None) => {
                    builder.push("TRUE");
                }
            },
            Predicate::Contains { needle, .. } => {
                builder.push(column).push(" ILIKE ");
                builder.push_bind(format!("%{}%", escape_like(needle)));
            }
        }
    }
}

/// Without an explicit order rows come back by id. The id tiebreak keeps
/// pages stable when the sort column has duplicates.
pub(super) fn push_order<F: FilterField>(
    builder: &mut QueryBuilder<'_, Postgres>,
    order: Option<&OrderBy<F>>,
) {
    match order {
        Some(order) => {
            let column = order.field.column();
            builder
                .push(" ORDER BY ")
                .push(column)
                .push(" ")
                .push(order.direction.as_sql());
            if column != "id" {
                builder.push(", id ASC");
            }
        }
        None => {
            builder.push(" ORDER BY id ASC");
        }
    }
}

pub(super) fn push_window<F: FilterField>(
    builder: &mut QueryBuilder<'_, Postgres>,
    plan: &QueryPlan<F>,
) {
    builder.push(" LIMIT ");
    builder.push_bind(i64::try_from(plan.limit()).unwrap_or(i64::MAX));
    builder.push(" OFFSET ");
    builder.push_bind(i64::try_from(plan.offset()).unwrap_or(i64::MAX));
}

fn push_value(builder: &mut QueryBuilder<'_, Postgres>, value: &FilterValue) {
    match value {
        FilterValue::Int(v) => builder.push_bind(*v),
        FilterValue::Text(v) => builder.push_bind(v.clone()),
        FilterValue::Timestamp(v) => builder.push_bind(*v),
    };
}

/// Escape LIKE metacharacters so the needle matches literally.
fn escape_like(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
