use crate::entities::{Assignment, Objective, Solution, VPInstance};
use crate::feasibility;

/// Every position holds a bin from the item's candidate domain
pub fn assignment_in_domains(instance: &VPInstance, assignment: &Assignment) -> bool {
    assignment.len() == instance.n_items()
        && assignment
            .iter()
            .enumerate()
            .all(|(item_id, bin_id)| instance.domain(item_id).contains(bin_id))
}

pub fn solution_matches_instance(instance: &VPInstance, solution: &Solution) -> bool {
    let Solution {
        assignment,
        objective,
        utilization: _,
        time_stamp: _,
    } = solution;

    assert!(assignment_in_domains(instance, assignment));
    assert!(feasibility::is_feasible(instance, assignment));
    assert_eq!(*objective, Objective::of(assignment, instance.overflow_id()));

    true
}
