// tests/support/mocks/plan.rs
use newsdesk_core::domain::query::{FilterField, Filterable, Predicate, QueryPlan};

/// Evaluate a plan over rows already ordered by id, mirroring the SQL the
/// Postgres stores render: filter, stable sort, then window.
pub fn run_plan<F, R>(rows: Vec<R>, plan: &QueryPlan<F>) -> Vec<R>
where
    F: FilterField,
    R: Filterable<F>,
{
    let mut rows: Vec<R> = rows
        .into_iter()
        .filter(|row| plan.predicates().iter().all(|p| p.matches(row)))
        .collect();
    if let Some(order) = plan.order() {
        rows.sort_by(|a, b| order.compare(a, b));
    }
    rows.into_iter()
        .skip(plan.offset() as usize)
        .take(plan.limit() as usize)
        .collect()
}

pub fn count_matching<F, R>(rows: &[R], predicates: &[Predicate<F>]) -> u64
where
    F: FilterField,
    R: Filterable<F>,
{
    rows.iter()
        .filter(|row| predicates.iter().all(|p| p.matches(*row)))
        .count() as u64
}
