use setacc_bench::generate_random_state;
use setacc_core::{AccumulatorScheme, Operation};
use setacc_hybrid::HybridScheme;

#[test]
fn elements_hashing_to_different_segments_are_all_provable() {
    let state = generate_random_state(200);
    let mut scheme = HybridScheme::create_with_segments(state.clone(), 8);
    let commitment = scheme.commitment();

    for element in state.iter().step_by(17) {
        let proof = scheme
            .prove_membership(element)
            .expect("every element in the committed state should be provable");
        assert!(HybridScheme::verify_membership(&commitment, element, &proof));
    }
}

#[test]
fn a_batch_touching_several_segments_rebuilds_the_top_tree() {
    let state = generate_random_state(100);
    let mut scheme = HybridScheme::create_with_segments(state.clone(), 8);
    let old_root = scheme.commitment();

    let del: Vec<_> = state.iter().take(20).cloned().collect();
    let add: Vec<_> = (0..20).map(|i| vec![9u8; 8 + i]).collect();
    scheme
        .apply_change(Operation::Batch {
            add: add.clone(),
            del: del.clone(),
        })
        .unwrap();

    let new_root = scheme.commitment();
    assert_ne!(old_root, new_root, "the top-level commitment must change after a batch touching its segments");

    for element in &del {
        assert!(scheme.prove_membership(element).is_none());
    }
    let commitment = scheme.commitment();
    for element in &add {
        let proof = scheme.prove_membership(element).unwrap();
        assert!(HybridScheme::verify_membership(&commitment, element, &proof));
    }
}

#[test]
fn a_non_power_of_two_segment_count_still_shards_correctly() {
    let state = generate_random_state(37);
    let mut scheme = HybridScheme::create_with_segments(state.clone(), 5);
    let commitment = scheme.commitment();
    for element in &state {
        let proof = scheme.prove_membership(element).unwrap();
        assert!(HybridScheme::verify_membership(&commitment, element, &proof));
    }
}
