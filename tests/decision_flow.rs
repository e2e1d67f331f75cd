//! End-to-end decision flows over the mock solver.
//!
//! Exercises the edit -> assemble -> submit -> render pipeline without a
//! network, the way an interactive front end would drive it.

use decision_desk::adapters::{MockFailure, MockReply, MockSolverClient, RecordedCall};
use decision_desk::application::{AhpDecisionSession, ElectreDecisionSession};
use decision_desk::domain::foundation::GroupSize;
use decision_desk::ports::{AhpFullResult, ElectreRankResult};

fn size(n: u8) -> GroupSize {
    GroupSize::try_new(n).unwrap()
}

#[tokio::test]
async fn full_ahp_flow_assembles_all_edits_into_one_request() {
    let solver = MockSolverClient::new().with_reply(MockReply::AhpFull(AhpFullResult {
        criteria_weights: vec![0.6667, 0.3333],
        local_alt_weights: vec![vec![0.75, 0.25], vec![0.5, 0.5]],
        global_scores: vec![0.6667, 0.3333],
        best_alternative: 0,
    }));

    let mut session = AhpDecisionSession::new(size(2), size(2));

    // Criteria table: criterion 1 is twice as important as criterion 2.
    assert!(session.hierarchy_mut().enter_criteria_comparison(0, 1, "2"));

    // Alternatives under criterion 0: option 1 three times preferred.
    assert!(session.hierarchy_mut().enter_alternative_comparison(0, 1, "3"));

    // A stray keystroke and a lower-triangle edit change nothing.
    assert!(!session.hierarchy_mut().enter_criteria_comparison(0, 1, "x"));
    assert!(!session.hierarchy_mut().enter_criteria_comparison(1, 0, "9"));

    session.compute(&solver).await;

    match &solver.calls()[0] {
        RecordedCall::AhpFull(request) => {
            assert_eq!(request.criteria_matrix, vec![vec![1.0, 2.0], vec![0.5, 1.0]]);
            assert_eq!(
                request.alt_matrices[0],
                vec![vec![1.0, 3.0], vec![0.3333, 1.0]]
            );
            // Criterion 1 was never edited: identity diagonal, zero sentinels.
            assert_eq!(
                request.alt_matrices[1],
                vec![vec![1.0, 0.0], vec![0.0, 1.0]]
            );
        }
        other => panic!("Expected AhpFull call, got {:?}", other),
    }

    let result = session.result().unwrap();
    assert_eq!(result.best_alternative, 0);
    assert!(session.error().is_none());
}

#[tokio::test]
async fn edits_under_inactive_criteria_survive_focus_changes() {
    let solver = MockSolverClient::new();
    let mut session = AhpDecisionSession::new(size(3), size(2));

    session.hierarchy_mut().set_active_criterion(2);
    session.hierarchy_mut().enter_alternative_comparison(0, 1, "5");
    session.hierarchy_mut().set_active_criterion(0);
    session.hierarchy_mut().enter_alternative_comparison(0, 1, "2");

    session.compute(&solver).await;

    match &solver.calls()[0] {
        RecordedCall::AhpFull(request) => {
            assert_eq!(request.alt_matrices[0][0][1], 2.0);
            assert_eq!(request.alt_matrices[2][0][1], 5.0);
            assert_eq!(request.alt_matrices[1][0][1], 0.0);
        }
        other => panic!("Expected AhpFull call, got {:?}", other),
    }
}

#[tokio::test]
async fn electre_flow_normalizes_before_submitting() {
    let solver = MockSolverClient::new().with_reply(MockReply::ElectreRank(ElectreRankResult {
        ranking: vec![1, 0],
        net_flows: vec![-0.3, 0.3],
        concordance_threshold: 0.6,
        discordance_threshold: 0.4,
    }));

    let mut session = ElectreDecisionSession::new(size(2), size(2));
    session.worksheet_mut().enter_weight(0, "2");
    session.worksheet_mut().enter_weight(1, "2");
    session.worksheet_mut().enter_performance(0, 0, "10");
    session.worksheet_mut().enter_performance(0, 1, "4");
    session.worksheet_mut().enter_performance(1, 0, "6");
    session.worksheet_mut().enter_performance(1, 1, "8");

    session.compute(&solver).await;

    match &solver.calls()[0] {
        RecordedCall::ElectreRank(request) => {
            assert_eq!(request.weights, vec![0.5, 0.5]);
            assert_eq!(
                request.performance_matrix,
                vec![vec![10.0, 4.0], vec![6.0, 8.0]]
            );
        }
        other => panic!("Expected ElectreRank call, got {:?}", other),
    }
    assert_eq!(session.result().unwrap().ranking, vec![1, 0]);
}

#[tokio::test]
async fn solver_rejection_replaces_result_with_error_panel_text() {
    let solver = MockSolverClient::new()
        .with_reply(MockReply::ElectreRank(ElectreRankResult {
            ranking: vec![0, 1],
            net_flows: vec![0.1, -0.1],
            concordance_threshold: 0.6,
            discordance_threshold: 0.4,
        }))
        .with_failure(MockFailure::Rejected {
            status: 500,
            message: "bad matrix".to_string(),
        });

    let mut session = ElectreDecisionSession::new(size(2), size(2));
    session.worksheet_mut().enter_weight(0, "1");
    session.worksheet_mut().enter_weight(1, "1");

    session.compute(&solver).await;
    assert!(session.result().is_some());

    session.compute(&solver).await;
    assert!(session.result().is_none());
    assert_eq!(session.error(), Some("bad matrix"));

    // The worksheet still holds the entered weights for a corrected retry.
    assert_eq!(session.worksheet().raw_weights(), vec![1.0, 1.0]);
    assert!(!session.is_busy());
}
