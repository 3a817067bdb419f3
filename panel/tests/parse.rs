use panel::*;

use corefit::utils::*;

fn get_crate_root() -> Result<PathBuf, std::env::VarError> {
    Ok(PathBuf::from(std::env::var("CARGO_MANIFEST_DIR")?))
}

#[test]
fn sizes_survive_whitespace_and_trailing_commas() {
    let parsed = parse_sizes(" 100, 500 ,200,300,600,400, ").unwrap();
    assert_eq!(parsed, vec![100, 500, 200, 300, 600, 400]);
    assert!(parse_sizes("100,abc").is_err());
}

#[test]
fn inline_procs_parse_as_name_size_pairs() {
    let parsed = parse_procs("p1:312, p2 : 196").unwrap();
    assert_eq!(parsed[0], Request::new("p1", 312));
    assert_eq!(parsed[1], Request::new("p2", 196));
    assert!(parse_procs("p1=312").is_err());
    assert!(parse_procs("p1:lots").is_err());
}

#[test]
fn csv_requests_skip_the_header() {
    let mut csv_path = get_crate_root().unwrap();
    csv_path.push("tests/data/procs.csv");
    let parsed = read_procs_csv(&csv_path).unwrap();
    assert_eq!(
        parsed,
        vec![
            Request::new("p1", 312),
            Request::new("p2", 196),
            Request::new("p3", 80),
            Request::new("p4", 486),
        ]
    );
}

#[test]
fn json_reports_carry_the_whole_run() {
    let load = corefit::workload::init(
        vec![100, 500, 200, 300, 600, 400],
        parse_procs("p1:312,p2:196,p3:80,p4:486").unwrap(),
    )
    .unwrap();
    let runs = corefit::sim::run_all(&load.sizes, &load.requests);
    let doc = emit_json(&runs).unwrap();
    assert!(doc.contains("First-Fit"));
    assert!(doc.contains("Best-Fit"));
    assert!(doc.contains("Worst-Fit"));
    assert!(doc.contains("holes_examined"));
}
