#[cfg(test)]
mod tests {
    use std::path::Path;

    use bfs::config::BFSConfig;
    use bfs::io;
    use bfs::io::table::read_table_instance;
    use bfs::opt::bfs::BFSOptimizer;
    use bfs::opt::enumerator::AssignmentEnumerator;
    use bfs::opt::selector::select;
    use float_cmp::approx_eq;
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;
    use varpack::VPError;
    use varpack::entities::{
        AllocationConstraint, Assignment, Bin, Item, Size, Solution, VPInstance,
    };
    use varpack::feasibility;

    const N_RANDOM_INSTANCES: usize = 40;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn build_instance(
        n_items: usize,
        item_size: [u64; 4],
        capacities: &[[u64; 4]],
        rows: &[Vec<bool>],
    ) -> VPInstance {
        let items = (0..n_items)
            .map(|i| Item::new(i, Size::new(item_size)))
            .collect();
        let bins = capacities
            .iter()
            .enumerate()
            .map(|(i, c)| Bin::new(i, Size::new(*c)))
            .collect();
        let constraint = AllocationConstraint::from_rows(rows, capacities.len()).unwrap();
        VPInstance::new(items, bins, constraint).unwrap()
    }

    fn solve(instance: VPInstance, config: BFSConfig) -> Result<Solution, VPError> {
        BFSOptimizer::new(instance, config).unwrap().solve()
    }

    fn random_instance(rng: &mut SmallRng) -> (usize, [u64; 4], Vec<[u64; 4]>, Vec<Vec<bool>>) {
        let n_items = rng.random_range(0..=5);
        let n_bins = rng.random_range(1..=3);
        let item_size = [
            rng.random_range(0..=2),
            rng.random_range(0..=2),
            rng.random_range(0..=1),
            rng.random_range(0..=1),
        ];
        let capacities = (0..n_bins)
            .map(|_| [(); 4].map(|_| rng.random_range(0..=4)))
            .collect_vec();
        let rows = (0..n_items)
            .map(|_| (0..n_bins).map(|_| rng.random_bool(0.6)).collect_vec())
            .collect_vec();
        (n_items, item_size, capacities, rows)
    }

    /// Reference: filter the full product of the domains sequentially, then select
    fn reference(instance: &VPInstance) -> Assignment {
        let feasible = AssignmentEnumerator::new(instance.domains())
            .filter(|a| feasibility::is_feasible(instance, a))
            .collect_vec();
        select(feasible, instance.overflow_id()).unwrap().0
    }

    #[test_case(1, [1, 1, 1, 1], &[[1, 1, 1, 1]], &[vec![true]], &[0], 1, Some(1); "single item fits")]
    #[test_case(2, [1, 0, 0, 0], &[[1, 0, 0, 0]], &[vec![true], vec![true]], &[0, 1], 1, Some(1); "overflow absorbs second item")]
    #[test_case(2, [1, 0, 0, 0], &[[1, 0, 0, 0], [1, 0, 0, 0]], &[vec![true, true], vec![true, true]], &[0, 1], 2, Some(1); "one item per bin")]
    #[test_case(0, [1, 1, 1, 1], &[[1, 1, 1, 1]], &[], &[], 0, None; "no items")]
    #[test_case(2, [1, 0, 0, 0], &[[1, 0, 0, 0]], &[vec![false], vec![false]], &[1, 1], 0, None; "nothing allowed")]
    #[test_case(4, [1, 1, 0, 0], &[[3, 3, 0, 0], [2, 2, 0, 0]], &[vec![true, true], vec![true, true], vec![true, true], vec![true, true]], &[0, 0, 1, 1], 4, Some(4); "product prefers balance")]
    fn scenario(
        n_items: usize,
        item_size: [u64; 4],
        capacities: &[[u64; 4]],
        rows: &[Vec<bool>],
        expected_assignment: &[usize],
        expected_allocated: usize,
        expected_product: Option<u64>,
    ) {
        init_logger();
        let instance = build_instance(n_items, item_size, capacities, rows);
        let solution = solve(instance, BFSConfig::default()).unwrap();

        assert_eq!(solution.assignment.bin_ids(), expected_assignment);
        assert_eq!(solution.n_allocated(), expected_allocated);
        assert_eq!(solution.occupancy_product(), expected_product);
        if expected_product.is_none_or(|p| p == 1) {
            assert_eq!(solution.utilization, 0.0);
        }
    }

    #[test_case("../assets/set2.json"; "json")]
    fn json_instance(path: &str) {
        init_logger();
        let ext_instance = io::read_json_instance(Path::new(path)).unwrap();
        let instance = varpack::io::import(&ext_instance).unwrap();
        check_set2(instance);
    }

    #[test_case("../assets/set2"; "tables")]
    fn table_instance(prefix: &str) {
        init_logger();
        let ext_instance = read_table_instance(Path::new(prefix)).unwrap();
        assert_eq!(ext_instance.name, "set2");
        let instance = varpack::io::import(&ext_instance).unwrap();
        check_set2(instance);
    }

    fn check_set2(instance: VPInstance) {
        assert_eq!(instance.n_items(), 5);
        assert_eq!(instance.n_bins(), 4);
        assert_eq!(instance.n_assignments(), 360);

        let config = BFSConfig {
            prune: false,
            ..BFSConfig::default()
        };
        let mut optimizer = BFSOptimizer::new(instance, config).unwrap();
        let solution = optimizer.solve().unwrap();

        assert_eq!(solution.assignment.bin_ids(), &[0, 0, 1, 3, 3]);
        assert_eq!(solution.n_allocated(), 5);
        assert_eq!(solution.occupancy_product(), Some(4));
        assert!(approx_eq!(
            f64,
            solution.utilization,
            19.102_675_018_894_7,
            epsilon = 1e-9
        ));
        assert_eq!(optimizer.stats.n_pruned_partitions, 0);
        assert_eq!(optimizer.stats.n_enumerated, 360);
        assert_eq!(optimizer.stats.n_feasible, 218);

        let export = varpack::io::export(&optimizer.instance, &solution, *bfs::EPOCH);
        assert_eq!(export.assignment, vec![0, 0, 1, 3, 3]);
        assert_eq!(export.overflow_bin_id, 4);
        assert_eq!(export.allocations.len(), 5);
    }

    #[test]
    fn infeasible_when_no_assignment_fits() {
        // loads are computed with the size of item 0, so the overflow bin cannot hold both items
        let items = vec![
            Item::new(0, Size::new([5, 0, 0, 0])),
            Item::new(1, Size::new([0, 0, 0, 0])),
        ];
        let bins = vec![Bin::new(0, Size::ZERO)];
        let instance =
            VPInstance::new(items, bins, AllocationConstraint::full(2, 1)).unwrap();
        assert_eq!(
            solve(instance, BFSConfig::default()).unwrap_err(),
            VPError::Infeasible
        );
    }

    #[test]
    fn matches_sequential_reference() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..N_RANDOM_INSTANCES {
            let (n_items, item_size, capacities, rows) = random_instance(&mut rng);
            let instance = build_instance(n_items, item_size, &capacities, &rows);
            let expected = reference(&instance);
            let solution = solve(instance, BFSConfig::default()).unwrap();
            assert_eq!(solution.assignment, expected);
        }
    }

    #[test]
    fn feasible_assignments_stay_in_range_and_capacity() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..N_RANDOM_INSTANCES {
            let (n_items, item_size, capacities, rows) = random_instance(&mut rng);
            let instance = build_instance(n_items, item_size, &capacities, &rows);
            let counted = AssignmentEnumerator::new(instance.domains())
                .filter(|a| feasibility::is_feasible(&instance, a))
                .inspect(|a| {
                    assert!(a.iter().all(|&b| b <= instance.overflow_id()));
                    let counts = a.bin_counts(instance.n_bins() + 1);
                    for (bin, &count) in instance.all_bins().zip(counts.iter()) {
                        for k in 0..4 {
                            assert!(count as u64 * item_size[k] <= bin.capacity.0[k]);
                        }
                    }
                })
                .count();
            // everything in the overflow bin is always feasible
            assert!(counted >= 1);
        }
    }

    #[test]
    fn independent_of_threads_and_pruning() {
        let mut rng = SmallRng::seed_from_u64(2);
        let configs = [
            BFSConfig {
                n_threads: Some(1),
                prune: false,
                ..BFSConfig::default()
            },
            BFSConfig {
                n_threads: Some(4),
                prune: true,
                ..BFSConfig::default()
            },
            BFSConfig {
                n_threads: Some(3),
                prune: false,
                max_assignments: None,
            },
        ];
        for _ in 0..N_RANDOM_INSTANCES {
            let (n_items, item_size, capacities, rows) = random_instance(&mut rng);
            let instance = build_instance(n_items, item_size, &capacities, &rows);
            let solutions = configs
                .iter()
                .map(|c| solve(instance.clone(), *c).unwrap().assignment)
                .collect_vec();
            assert!(solutions.iter().all_equal(), "{solutions:?}");
            // running twice yields the same winner
            let again = solve(instance, configs[1]).unwrap().assignment;
            assert_eq!(again, solutions[0]);
        }
    }

    #[test]
    fn more_allowed_bins_never_decrease_allocation() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..N_RANDOM_INSTANCES {
            let (n_items, item_size, capacities, rows) = random_instance(&mut rng);
            if n_items == 0 {
                continue;
            }
            let before = solve(
                build_instance(n_items, item_size, &capacities, &rows),
                BFSConfig::default(),
            )
            .unwrap();

            let mut relaxed = rows.clone();
            let item = rng.random_range(0..n_items);
            let bin = rng.random_range(0..capacities.len());
            relaxed[item][bin] = true;
            let after = solve(
                build_instance(n_items, item_size, &capacities, &relaxed),
                BFSConfig::default(),
            )
            .unwrap();

            assert!(after.n_allocated() >= before.n_allocated());
        }
    }

    #[test]
    fn unused_bin_does_not_change_product() {
        let mut rng = SmallRng::seed_from_u64(4);
        for _ in 0..N_RANDOM_INSTANCES {
            let (n_items, item_size, capacities, rows) = random_instance(&mut rng);
            let before = solve(
                build_instance(n_items, item_size, &capacities, &rows),
                BFSConfig::default(),
            )
            .unwrap();

            // an extra bin no item is allowed in stays empty in every assignment
            let mut capacities = capacities.clone();
            capacities.push([4; 4]);
            let rows = rows
                .iter()
                .map(|r| r.iter().copied().chain([false]).collect_vec())
                .collect_vec();
            let after = solve(
                build_instance(n_items, item_size, &capacities, &rows),
                BFSConfig::default(),
            )
            .unwrap();

            assert_eq!(after.objective, before.objective);
        }
    }
}
