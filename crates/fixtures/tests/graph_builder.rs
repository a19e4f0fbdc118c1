//! Archived execution graph fixture scenarios.
//!
//! Covers the builder end to end:
//!
//! 1. Empty builder -- every default in place
//! 2. Explicit fields pass through untouched
//! 3. No cross-field validation (failed state without a cause)
//! 4. Creation order: explicit order preserved, default derived from tasks
//! 5. State timestamp length precondition
//! 6. Reproducible defaults with a seeded rng
//! 7. Repeated builds and JSON rendering

use std::collections::BTreeMap;

use jobarchive_core::{
    CheckpointStatsCounts, CheckpointStatsSnapshot, ErrorInfo, JobId, JobStatus, JobType,
    OptionalFailure, SerializedValue, StringifiedAccumulatorResult, TernaryBoolean,
};
use jobarchive_fixtures::graph::{
    CHANGELOG_STORAGE_NAME, CHECKPOINT_STORAGE_NAME, STATE_BACKEND_NAME,
};
use jobarchive_fixtures::{
    build_archived_graph, plan_for, tasks_from, vertex, ArchivedExecutionConfigBuilder,
    ArchivedExecutionGraphBuilder, FixtureError, GraphOptions,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ──────────────────────────────────────────────
// 1. Empty builder
// ──────────────────────────────────────────────

#[test]
fn empty_builder_produces_finished_default_graph() {
    let graph = ArchivedExecutionGraphBuilder::new().build();

    assert_eq!(graph.state(), JobStatus::Finished);
    assert!(!graph.is_stoppable());
    assert_eq!(graph.pending_operator_count(), 0);
    assert!(graph.tasks().is_empty());
    assert!(graph.vertices_topologically().is_empty());
    assert!(graph.archived_user_accumulators().is_empty());
    assert!(graph.serialized_user_accumulators().is_empty());
    assert_eq!(
        graph.archived_execution_config(),
        &ArchivedExecutionConfigBuilder::new().build()
    );
    assert!(graph.failure_info().is_none());
    assert!(graph.checkpoint_stats_snapshot().is_none());
    assert!(graph.stream_graph_json().is_none());
}

#[test]
fn empty_builder_has_zeroed_timestamps_for_every_status() {
    let graph = ArchivedExecutionGraphBuilder::new().build();
    assert_eq!(graph.state_timestamps().len(), JobStatus::COUNT);
    assert!(graph.state_timestamps().iter().all(|&ts| ts == 0));
}

#[test]
fn default_plan_is_derived_from_resolved_id_and_name() {
    let graph = ArchivedExecutionGraphBuilder::new().build();
    let plan = graph.plan();
    assert_eq!(plan.jid, graph.job_id().to_string());
    assert_eq!(plan.name, graph.job_name());
    assert_eq!(plan.plan_type, "");
    assert!(plan.nodes.is_empty());
}

#[test]
fn default_plan_uses_explicit_id_and_name() {
    let job_id = JobId::from_bytes([0x42; 16]);
    let graph = ArchivedExecutionGraphBuilder::new()
        .job_id(job_id)
        .job_name("sessionize")
        .build();
    assert_eq!(graph.plan().jid, "42".repeat(16));
    assert_eq!(graph.plan().name, "sessionize");
}

#[test]
fn environment_constants_are_fixed() {
    let graph = ArchivedExecutionGraphBuilder::new()
        .state(JobStatus::Canceled)
        .build();
    assert_eq!(graph.job_type(), JobType::Streaming);
    assert_eq!(graph.state_backend_name(), Some(STATE_BACKEND_NAME));
    assert_eq!(graph.checkpoint_storage_name(), Some(CHECKPOINT_STORAGE_NAME));
    assert_eq!(graph.changelog_storage_name(), Some(CHANGELOG_STORAGE_NAME));
    assert_eq!(graph.state_changelog_enabled(), TernaryBoolean::Undefined);
    assert!(graph.is_archived());
}

// ──────────────────────────────────────────────
// 2. Explicit fields
// ──────────────────────────────────────────────

#[test]
fn explicit_fields_pass_through() {
    let job_id = JobId::from_bytes([7; 16]);
    let source = vertex("source", 2);
    let sink = vertex("sink", 1);
    let order = vec![source.clone(), sink.clone()];
    let plan = plan_for(job_id, "clicks", &order);
    let mut timestamps = vec![0; JobStatus::COUNT];
    timestamps[JobStatus::Created.ordinal()] = 1_000;
    timestamps[JobStatus::Failed.ordinal()] = 5_000;
    let config = ArchivedExecutionConfigBuilder::new().parallelism(4).build();
    let stats = CheckpointStatsSnapshot {
        counts: CheckpointStatsCounts {
            total: 3,
            completed: 2,
            failed: 1,
            ..CheckpointStatsCounts::default()
        },
        latest_completed_checkpoint_id: Some(2),
    };
    let serialized = BTreeMap::from([(
        "clicks".to_string(),
        SerializedValue::new(&OptionalFailure::Success(serde_json::json!(1234))).unwrap(),
    )]);

    let graph = ArchivedExecutionGraphBuilder::new()
        .job_id(job_id)
        .job_name("clicks")
        .tasks(tasks_from(order.clone()))
        .vertices_in_creation_order(order.clone())
        .state_timestamps(timestamps)
        .state(JobStatus::Failed)
        .failure_cause(ErrorInfo::new("java.lang.RuntimeException: boom", 5_000))
        .plan(plan.clone())
        .stream_graph_json(r#"{"nodes":[]}"#)
        .archived_user_accumulators(vec![StringifiedAccumulatorResult::new(
            "clicks", "Long", "1234",
        )])
        .archived_execution_config(config.clone())
        .stoppable(true)
        .serialized_user_accumulators(serialized.clone())
        .checkpoint_stats_snapshot(stats.clone())
        .pending_operator_count(2)
        .build();

    assert_eq!(graph.job_id(), job_id);
    assert_eq!(graph.job_name(), "clicks");
    assert_eq!(graph.tasks().len(), 2);
    assert_eq!(graph.vertices_topologically(), order.as_slice());
    assert_eq!(graph.status_timestamp(JobStatus::Created), 1_000);
    assert_eq!(graph.status_timestamp(JobStatus::Failed), 5_000);
    assert_eq!(graph.state(), JobStatus::Failed);
    assert_eq!(graph.failure_info().map(|e| e.timestamp), Some(5_000));
    assert_eq!(graph.plan(), &plan);
    assert_eq!(graph.stream_graph_json(), Some(r#"{"nodes":[]}"#));
    assert_eq!(graph.archived_user_accumulators()[0].value, "1234");
    assert_eq!(graph.archived_execution_config(), &config);
    assert!(graph.is_stoppable());
    assert_eq!(graph.serialized_user_accumulators(), &serialized);
    assert_eq!(graph.checkpoint_stats_snapshot(), Some(&stats));
    assert_eq!(graph.pending_operator_count(), 2);
    assert_eq!(graph.job_vertex(&sink.job_vertex_id), Some(&sink));
}

#[test]
fn serialized_accumulators_decode_after_build() {
    let serialized = BTreeMap::from([
        (
            "ok".to_string(),
            SerializedValue::new(&OptionalFailure::Success(serde_json::json!([1, 2]))).unwrap(),
        ),
        (
            "broken".to_string(),
            SerializedValue::new(&OptionalFailure::Failure("overflow".to_string())).unwrap(),
        ),
    ]);
    let graph = ArchivedExecutionGraphBuilder::new()
        .serialized_user_accumulators(serialized)
        .build();

    let accumulators = graph.serialized_user_accumulators();
    let ok = accumulators["ok"].decode().unwrap();
    assert_eq!(ok.value(), Some(&serde_json::json!([1, 2])));
    let broken = accumulators["broken"].decode().unwrap();
    assert_eq!(broken.failure_cause(), Some("overflow"));
}

// ──────────────────────────────────────────────
// 3. No cross-field validation
// ──────────────────────────────────────────────

#[test]
fn failed_state_without_cause_is_accepted() {
    let graph = ArchivedExecutionGraphBuilder::new()
        .state(JobStatus::Failed)
        .try_build()
        .expect("no cross-field validation");
    assert_eq!(graph.state(), JobStatus::Failed);
    assert!(graph.failure_info().is_none());
}

// ──────────────────────────────────────────────
// 4. Creation order
// ──────────────────────────────────────────────

#[test]
fn explicit_creation_order_is_preserved() {
    let a = vertex("A", 1);
    let b = vertex("B", 1);
    let graph = ArchivedExecutionGraphBuilder::new()
        .tasks(tasks_from([a.clone(), b.clone()]))
        .vertices_in_creation_order(vec![b.clone(), a.clone()])
        .build();
    assert_eq!(graph.vertices_topologically(), &[b, a]);
}

#[test]
fn default_creation_order_follows_task_map_iteration() {
    let vertices = vec![vertex("source", 1), vertex("map", 2), vertex("sink", 1)];
    let tasks = tasks_from(vertices);
    let expected: Vec<_> = tasks.values().cloned().collect();

    let graph = ArchivedExecutionGraphBuilder::new().tasks(tasks).build();
    assert_eq!(graph.vertices_topologically(), expected.as_slice());
}

#[test]
fn creation_order_without_tasks_is_kept_as_given() {
    let lonely = vertex("orphan", 1);
    let graph = ArchivedExecutionGraphBuilder::new()
        .vertices_in_creation_order(vec![lonely.clone()])
        .build();
    assert!(graph.tasks().is_empty());
    assert_eq!(graph.vertices_topologically(), &[lonely]);
}

// ──────────────────────────────────────────────
// 5. State timestamp precondition
// ──────────────────────────────────────────────

#[test]
fn too_few_timestamps_fail() {
    let err = ArchivedExecutionGraphBuilder::new()
        .state_timestamps(vec![0; JobStatus::COUNT - 1])
        .try_build()
        .unwrap_err();
    assert_eq!(
        err,
        FixtureError::StateTimestampsLength {
            expected: JobStatus::COUNT,
            actual: JobStatus::COUNT - 1,
        }
    );
}

#[test]
fn empty_timestamps_fail() {
    let result = ArchivedExecutionGraphBuilder::new()
        .state_timestamps(Vec::new())
        .try_build();
    assert!(matches!(
        result,
        Err(FixtureError::StateTimestampsLength { actual: 0, .. })
    ));
}

#[test]
fn error_message_names_both_lengths() {
    let err = ArchivedExecutionGraphBuilder::new()
        .state_timestamps(vec![0; 12])
        .try_build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "state timestamps must hold one entry per job status: expected 10, got 12"
    );
}

#[test]
#[should_panic(expected = "invalid archived execution graph fixture")]
fn build_aborts_on_wrong_timestamp_count() {
    ArchivedExecutionGraphBuilder::new()
        .state_timestamps(vec![0; JobStatus::COUNT + 1])
        .build();
}

// ──────────────────────────────────────────────
// 6. Reproducible defaults
// ──────────────────────────────────────────────

#[test]
fn same_seed_same_defaults() {
    let builder = ArchivedExecutionGraphBuilder::new();
    let first = builder
        .try_build_with_rng(&mut StdRng::seed_from_u64(42))
        .unwrap();
    let second = builder
        .try_build_with_rng(&mut StdRng::seed_from_u64(42))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn pure_function_matches_builder() {
    let options = GraphOptions {
        job_name: Some("joined".to_string()),
        state: Some(JobStatus::Suspended),
        ..GraphOptions::default()
    };
    let from_fn = build_archived_graph(options.clone(), &mut StdRng::seed_from_u64(9)).unwrap();
    let from_builder = ArchivedExecutionGraphBuilder::from_options(options)
        .try_build_with_rng(&mut StdRng::seed_from_u64(9))
        .unwrap();
    assert_eq!(from_fn, from_builder);
}

#[test]
fn unseeded_builders_generate_distinct_ids() {
    let first = ArchivedExecutionGraphBuilder::new().build();
    let second = ArchivedExecutionGraphBuilder::new().build();
    assert_ne!(first.job_id(), second.job_id());
}

// ──────────────────────────────────────────────
// 7. Repeated builds and JSON rendering
// ──────────────────────────────────────────────

#[test]
fn builder_can_be_built_again_after_mutation() {
    let builder = ArchivedExecutionGraphBuilder::new().job_name("reused");
    let first = builder.build();
    let builder = builder.state(JobStatus::Canceled);
    let second = builder.build();

    assert_eq!(first.state(), JobStatus::Finished);
    assert_eq!(second.state(), JobStatus::Canceled);
    assert_eq!(first.job_name(), second.job_name());
}

#[test]
fn json_rendering_carries_streaming_job_type() {
    let graph = ArchivedExecutionGraphBuilder::new()
        .job_id(JobId::from_bytes([0; 16]))
        .job_name("render")
        .build();
    let json = serde_json::to_value(&graph).unwrap();
    assert_eq!(json["job_type"], "STREAMING");
    assert_eq!(json["state"], "FINISHED");
    assert_eq!(json["job_id"], "0".repeat(32));
    assert_eq!(json["state_changelog_enabled"], "UNDEFINED");
    assert_eq!(json["state_timestamps"].as_array().map(Vec::len), Some(10));
}
