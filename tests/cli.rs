use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_graph-traversal"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("GRAPH_TRAVERSAL_OUTPUT_FORMAT")
        .env_remove("GRAPH_TRAVERSAL_ALGORITHMS")
        .env_remove("GRAPH_TRAVERSAL_PROMPTS")
        .env_remove("GRAPH_TRAVERSAL_SHOW_ADJACENCY")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child.stdin.take().unwrap().write_all(stdin.as_bytes()).unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_run_prints_graph_and_traversals() {
    let output = run_cli(&["run"], "5 6\n0 1\n0 2\n1 3\n1 4\n2 4\n3 4\n0\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Graph:\n\
         Vertex 0 -> 1 2\n\
         Vertex 1 -> 0 3 4\n\
         Vertex 2 -> 0 4\n\
         Vertex 3 -> 1 4\n\
         Vertex 4 -> 1 2 3\n\
         Breadth First Search (BFS): 0 1 2 3 4\n\
         Depth First Search (DFS): 0 2 4 3 1\n"
    );
}

#[test]
fn test_run_with_prompts() {
    let output = run_cli(&["run", "--prompts", "always", "--algorithm", "bfs"], "1 0 0\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Enter the number of vertices in the graph: \
         Enter the number of edges in the graph: \
         Enter the edges (source destination):\n\
         Graph:\n\
         Vertex 0 ->\n\
         Enter the starting vertex for BFS and DFS: \
         Breadth First Search (BFS): 0\n"
    );
}

#[test]
fn test_run_json_output() {
    let output = run_cli(&["run", "--output", "json"], "3 1\n0 2\n2\n");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["start_vertex"], 2);
    assert_eq!(report["traversals"][0]["order"], serde_json::json!([2, 0]));
}

#[test]
fn test_invalid_size_exits_with_error() {
    let output = run_cli(&["run"], "0\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid graph size 0"), "stderr: {}", stderr);
}

#[test]
fn test_huge_vertex_count_exits_with_error() {
    let output = run_cli(&["run"], "9000000000000000000 0 0\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("too large to allocate"), "stderr: {}", stderr);
}

#[test]
fn test_out_of_range_edge_exits_with_error() {
    let output = run_cli(&["run"], "3 1\n0 3\n0\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("vertex 3 is out of range"), "stderr: {}", stderr);
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph-traversal.yml");
    let path_arg = path.to_str().unwrap();

    assert!(run_cli(&["init", "--config-file", path_arg], "").status.success());
    assert!(std::fs::read_to_string(&path).unwrap().contains("algorithms"));
    assert!(!run_cli(&["init", "--config-file", path_arg], "").status.success());
    assert!(run_cli(&["init", "--config-file", path_arg, "--force"], "").status.success());
}
