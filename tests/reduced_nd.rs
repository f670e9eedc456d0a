mod util;
use util::*;

use graph_dissect::prelude::*;

fn request(order: &str) -> OrderingRequest {
    OrderingRequest {
        reduction_order: order.to_string(),
        recursion_limit: 16,
        ..Default::default()
    }
}

#[test]
fn grid_ordering_is_a_permutation_for_every_order() {
    let csr = Csr::from_edges(150, &grid_edges(15, 10));
    for order in ["", "0", "1 2", "3", "4 5", "0 1 2 3 4 5", "5 4 3 2 1 0 0"] {
        let ordering = reduced_nd(&mut CallContext::silent(), &csr.input(), &request(order)).unwrap();
        assert_permutation(&ordering, 150);
    }
}

#[test]
fn bad_token_fails_and_restores_sink() {
    let csr = Csr::from_edges(5, &path_edges(5));
    let buf = SharedBuf::default();
    let mut ctx = CallContext::new(Diagnostics::from_writer(buf.clone()));
    let failing = OrderingRequest {
        suppress_output: false,
        ..request("0 99")
    };
    let err = reduced_nd(&mut ctx, &csr.input(), &failing).unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownReductionType {
            token: "99".to_string()
        }
    );
    assert!(buf.contents().contains("Unknown reduction type 99"));

    // a suppressed failure still hands the sink back
    let suppressed = OrderingRequest {
        suppress_output: true,
        ..request("7")
    };
    let before = buf.contents().len();
    assert!(reduced_nd(&mut ctx, &csr.input(), &suppressed).is_err());
    assert_eq!(buf.contents().len(), before);

    reduced_nd(&mut ctx, &csr.input(), &request("0")).unwrap();
    assert!(buf.contents().len() > before);
}

#[test]
fn whitespace_only_order_runs_without_reductions() {
    let csr = Csr::from_edges(40, &grid_edges(8, 5));
    let ordering = reduced_nd(&mut CallContext::silent(), &csr.input(), &request("  \t ")).unwrap();
    assert_permutation(&ordering, 40);
}

#[test]
fn deterministic_for_equal_requests() {
    let csr = Csr::from_edges(120, &grid_edges(12, 10));
    let req = OrderingRequest {
        seed: 9,
        mode: Mode::Strong,
        ..request("0 1 2 3 4 5")
    };
    let a = reduced_nd(&mut CallContext::silent(), &csr.input(), &req).unwrap();
    let b = reduced_nd(&mut CallContext::silent(), &csr.input(), &req).unwrap();
    assert_eq!(a, b);

    let c = reduced_nd_with_backend(&mut CallContext::silent(), &csr.input(), &req, &MinimumDegree)
        .unwrap();
    let d = reduced_nd_with_backend(&mut CallContext::silent(), &csr.input(), &req, &MinimumDegree)
        .unwrap();
    assert_eq!(c, d);
}

#[test]
fn deterministic_without_reductions() {
    let csr = Csr::from_edges(120, &grid_edges(12, 10));
    let req = OrderingRequest {
        seed: 3,
        ..request("")
    };
    let mut ctx = CallContext::silent();
    let a = reduced_nd_with_backend(&mut ctx, &csr.input(), &req, &MinimumDegree).unwrap();
    let b = reduced_nd_with_backend(&mut ctx, &csr.input(), &req, &MinimumDegree).unwrap();
    assert_eq!(a, b);
    assert_permutation(&a, 120);

    let c = reduced_nd(&mut ctx, &csr.input(), &req).unwrap();
    let d = reduced_nd(&mut CallContext::silent(), &csr.input(), &req).unwrap();
    assert_eq!(c, d);
}

#[test]
fn external_backends_give_permutations() {
    let csr = Csr::from_edges(96, &grid_edges(12, 8));
    let req = request("0 1 2 3 4 5");
    let md = reduced_nd_with_backend(&mut CallContext::silent(), &csr.input(), &req, &MinimumDegree)
        .unwrap();
    assert_permutation(&md, 96);
    let rcm = reduced_nd_with_backend(
        &mut CallContext::silent(),
        &csr.input(),
        &req,
        &ReverseCuthillMcKee,
    )
    .unwrap();
    assert_permutation(&rcm, 96);
}

#[test]
fn graph_reduced_to_nothing_skips_backend() {
    /// Fails if it is ever called.
    struct Never;
    impl OrderingBackend for Never {
        fn name(&self) -> &'static str {
            "never"
        }
        fn node_nd(&self, _: &CsrGraph, _: u64) -> Result<Permutation, GraphError> {
            Err(GraphError::OrderingBackend {
                backend: "never",
                message: "called".into(),
            })
        }
    }
    // a tree is eliminated entirely by repeated simplicial passes
    let edges: Vec<_> = (1..15).map(|v| ((v - 1) / 2, v)).collect();
    let csr = Csr::from_edges(15, &edges);
    let req = OrderingRequest {
        convergence_factor: 1.0,
        ..request("0")
    };
    let ordering = reduced_nd_with_backend(&mut CallContext::silent(), &csr.input(), &req, &Never)
        .unwrap();
    assert_permutation(&ordering, 15);
}

#[test]
fn backend_errors_propagate() {
    struct Broken;
    impl OrderingBackend for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }
        fn node_nd(&self, _: &CsrGraph, _: u64) -> Result<Permutation, GraphError> {
            Err(GraphError::OrderingBackend {
                backend: "broken",
                message: "no".into(),
            })
        }
    }
    let csr = Csr::from_edges(9, &grid_edges(3, 3));
    let err = reduced_nd_with_backend(&mut CallContext::silent(), &csr.input(), &request(""), &Broken)
        .unwrap_err();
    assert!(matches!(err, GraphError::OrderingBackend { backend: "broken", .. }));
}

#[cfg(feature = "metis-support")]
#[test]
fn metis_variant_orders_grid() {
    let csr = Csr::from_edges(100, &grid_edges(10, 10));
    let ordering = reduced_nd_metis(&mut CallContext::silent(), &csr.input(), &request("0 1 2")).unwrap();
    assert_permutation(&ordering, 100);
}
