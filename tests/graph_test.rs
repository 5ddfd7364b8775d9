//! End-to-end traversal tests over the Stark family fixture
//!
//! Fixture ids follow file order: vertices 1..=12 (Rickard, Eddard, Lyanna,
//! Benjen, Catelyn, Robb, Sansa, Arya, Bran, Rickon, Jon, Winterfell), edges
//! 1..=24.

use graphology::*;

const NODES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test-data/graphdb-nodes.json");
const EDGES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test-data/graphdb-edges.json");

fn starks() -> Graph {
    let mut graph = Graph::new("starks");
    let report = load_files(&mut graph, NODES, EDGES).unwrap();
    assert!(report.is_clean(), "fixture rejected: {:?}", report.errors);
    graph
}

fn names(query: &Query<'_>) -> Vec<String> {
    query
        .iter()
        .map(|v| v.name().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_fixture_loads() {
    let graph = starks();
    assert_eq!(graph.name(), "starks.db");
    assert_eq!(graph.vertex_count(), 12);
    assert_eq!(graph.edge_count(), 24);

    let arya = graph.find_vertex_by_id("8").unwrap();
    assert_eq!(arya.name(), Some("Arya Stark"));
    assert_eq!(arya.get_property("born").unwrap().as_integer(), Some(289));
    assert_eq!(arya.get_property("aliases").unwrap().as_array().unwrap().len(), 2);

    let benjen = graph.find_vertex_by_id("4").unwrap();
    assert!(benjen.has_label(&Label::new("NightsWatch")));

    let spouse = graph.find_edge_by_id("22").unwrap();
    assert!(spouse.is_a("Spouse"));
    assert_eq!(spouse.get_property("year").unwrap().as_integer(), Some(282));
}

#[test]
fn test_children_and_parents() {
    let graph = starks();

    let children = graph.v("Eddard Stark").out("Father");
    assert_eq!(
        names(&children),
        vec!["Robb Stark", "Sansa Stark", "Arya Stark", "Bran Stark", "Rickon Stark"]
    );

    let mother = graph.v("Jon Snow").in_("Mother");
    assert_eq!(names(&mother), vec!["Lyanna Stark"]);

    let parents = graph.v("Robb Stark").in_("Father").values();
    assert_eq!(parents.len(), 1);
    assert_eq!(parents[0].id, VertexId::from("2"));
}

#[test]
fn test_grandchildren() {
    let graph = starks();

    let grandchildren = graph.v("Rickard Stark").out("Father").out("Father");
    assert_eq!(grandchildren.len(), 5);

    let via_mother = graph.v("Rickard Stark").out("Father").out("Mother");
    assert_eq!(names(&via_mother), vec!["Jon Snow"]);
}

#[test]
fn test_both_directions() {
    let graph = starks();

    // incoming Sibling edge from Eddard comes before the outgoing one to Benjen
    let siblings = graph.v("Lyanna Stark").both("Sibling");
    assert_eq!(names(&siblings), vec!["Eddard Stark", "Benjen Stark"]);

    let residents = graph.v("Winterfell").in_("LivesIn");
    assert_eq!(names(&residents), vec!["Jon Snow", "Robb Stark"]);
}

#[test]
fn test_unique_take_except() {
    let graph = starks();

    let mother = graph.v("Sansa Stark").in_("Father").out("Spouse");
    assert_eq!(names(&mother), vec!["Catelyn Stark"]);

    // Rickon has no younger sibling, so the chain loses him
    let children = graph
        .v("Eddard Stark")
        .out("Spouse")
        .out("Mother")
        .out("Sibling")
        .in_("Sibling");
    assert_eq!(children.len(), 4);

    // every child reaches Catelyn, who reaches all five again
    let doubled = graph.v("Eddard Stark").out("Father").in_("Mother").out("Mother");
    assert_eq!(doubled.len(), 25);
    assert_eq!(doubled.clone().unique().len(), 5);

    let rest = graph
        .v("Eddard Stark")
        .out("Father")
        .except("6")
        .except("7")
        .take(2);
    assert_eq!(names(&rest), vec!["Arya Stark", "Bran Stark"]);
}

#[test]
fn test_filter_on_properties() {
    let graph = starks();

    let older = graph
        .v("Catelyn Stark")
        .out("Mother")
        .filter(|v| matches!(v.get_property("born").and_then(|b| b.as_integer()), Some(b) if b < 289));
    assert_eq!(names(&older), vec!["Robb Stark", "Sansa Stark"]);
}

#[test]
fn test_traversal_plan_matches_chain() {
    let graph = starks();

    let plan = Traversal::v("Rickard Stark")
        .out("Father")
        .out("Father")
        .unique()
        .except("9")
        .take(3);
    assert_eq!(
        plan.to_string(),
        "V(Rickard Stark).out(Father).out(Father).unique().except(9).take(3)"
    );

    let chained = graph
        .v("Rickard Stark")
        .out("Father")
        .out("Father")
        .unique()
        .except("9")
        .take(3);
    assert_eq!(plan.run(&graph).ids(), chained.ids());
}

#[test]
fn test_unknown_names_and_relationships() {
    let graph = starks();

    assert!(graph.v("Tyrion Lannister").is_empty());
    assert!(graph.v("Eddard Stark").out("Bannerman").is_empty());
    assert!(graph.v("Eddard Stark").out("father").is_empty());
}

#[test]
fn test_rejected_records() {
    let mut graph = starks();

    let dup = graph.add_vertex(Vertex::with_id("8").with_property("name", "Faceless Arya"));
    assert_eq!(dup, Err(GraphError::DuplicateId(VertexId::from("8"))));

    let dangling = graph.add_edge(Edge::new("11", "99", "Father"));
    assert_eq!(dangling, Err(GraphError::DanglingReference(VertexId::from("99"))));

    let unlabeled = graph.add_edge(Edge::new("11", "12", ""));
    assert_eq!(unlabeled, Err(GraphError::MissingLabel));

    assert_eq!(graph.vertex_count(), 12);
    assert_eq!(graph.edge_count(), 24);

    // the next auto id continues after the fixture
    let ghost = graph
        .add_vertex(Vertex::new().with_label("Direwolf").with_property("name", "Ghost"))
        .unwrap();
    assert_eq!(ghost, VertexId::from("13"));
    let edge = graph.add_edge(Edge::new("11", ghost, "Owns")).unwrap();
    assert_eq!(edge, EdgeId::from("25"));

    assert_eq!(names(&graph.v("Jon Snow").out("Owns")), vec!["Ghost"]);
}
