use super::*;
use rand::SeedableRng;

fn grid(w: usize, h: usize) -> Graph {
    let mut edges = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let v = y * w + x;
            if x + 1 < w {
                edges.push((v, v + 1));
            }
            if y + 1 < h {
                edges.push((v, v + w));
            }
        }
    }
    Graph::from_edges(w * h, &edges)
}

#[test]
fn zero_blocks_is_an_error() {
    let g = grid(2, 2);
    let cfg = PartitionConfig {
        k: 0,
        ..Default::default()
    };
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(
        BisectionPartitioner.partition(&cfg, &g, &mut rng),
        Err(PartitionError::NoParts)
    );
}

#[test]
fn empty_graph_gives_empty_labels() {
    let g = Graph::default();
    let mut rng = SmallRng::seed_from_u64(0);
    let part = BisectionPartitioner
        .partition(&PartitionConfig::default(), &g, &mut rng)
        .unwrap();
    assert!(part.is_empty());
}

#[test]
fn single_block_labels_everything_zero() {
    let g = grid(3, 3);
    let cfg = PartitionConfig {
        k: 1,
        ..Default::default()
    };
    let mut rng = SmallRng::seed_from_u64(0);
    let part = BisectionPartitioner.partition(&cfg, &g, &mut rng).unwrap();
    assert_eq!(part, vec![0; 9]);
}

#[test]
fn grid_four_way_is_balanced() {
    let g = grid(8, 8);
    let mut cfg = PartitionConfig {
        k: 4,
        ..Default::default()
    };
    configure_balance(&mut cfg, &g);
    let mut rng = SmallRng::seed_from_u64(5);
    let part = BisectionPartitioner.partition(&cfg, &g, &mut rng).unwrap();
    assert!(check_labels(64, &part, 4).is_ok());
    let weights = block_weights(g.node_weights(), &part, 4);
    for w in &weights {
        assert!(*w <= cfg.upper_bound_partition, "weights {weights:?}");
        assert!(*w > 0);
    }
    // the grid has 112 edges; compact blocks cut well under half
    assert!(edge_cut(&g, &part) < 56);
}

#[test]
fn odd_block_count_uses_every_block() {
    let g = grid(6, 5);
    let mut cfg = PartitionConfig {
        k: 3,
        ..Default::default()
    };
    configure_balance(&mut cfg, &g);
    let mut rng = SmallRng::seed_from_u64(9);
    let part = BisectionPartitioner.partition(&cfg, &g, &mut rng).unwrap();
    let weights = block_weights(g.node_weights(), &part, 3);
    assert!(weights.iter().all(|&w| w > 0), "weights {weights:?}");
    assert_eq!(weights.iter().sum::<i64>(), 30);
}

#[test]
fn unset_upper_bound_is_derived() {
    let g = grid(2, 5);
    let cfg = PartitionConfig::default();
    assert_eq!(block_upper_bound(&cfg, &g), 5);
    let fixed = PartitionConfig {
        upper_bound_partition: 7,
        ..Default::default()
    };
    assert_eq!(block_upper_bound(&fixed, &g), 7);
}
