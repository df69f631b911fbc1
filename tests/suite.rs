// Integration suite for the catalog: loads the shipped content, runs the
// documented query scenarios, and drives the helper binaries end to end.
mod support;

use anyhow::Result;
use portfolio_catalog::{
    Category, CategoryFilter, ContentStore, IconName, ProjectId, ProjectIndex, ProjectRecord,
    QuerySpec, SortOrder, TaxonomySource, facet_counts, filter_and_sort,
};
use serde_json::{Value, json};
use std::process::Command;
use support::{helper_binary, run_command, shipped_data_dir, stdout_json, write_data_dir};
use tempfile::TempDir;

fn alpha_beta() -> Vec<ProjectRecord> {
    serde_json::from_value(json!([
        {
            "id": 1, "title": "Alpha", "description": "", "longDescription": "",
            "technologies": ["Cisco"], "category": "Networking", "date": "2023-01-01"
        },
        {
            "id": 2, "title": "Beta", "description": "", "longDescription": "",
            "technologies": ["Snort"], "category": "Security", "date": "2024-01-01"
        }
    ]))
    .expect("fixture records")
}

fn ids(results: &[&ProjectRecord]) -> Vec<u64> {
    results.iter().map(|record| record.id.0).collect()
}

fn shipped_store() -> ContentStore {
    ContentStore::load_dir(&shipped_data_dir()).expect("shipped content loads")
}

// Scenario 1: all categories, newest first.
#[test]
fn scenario_all_categories_newest_first() {
    let records = alpha_beta();
    let results = filter_and_sort(&records, &QuerySpec::new());
    assert_eq!(ids(&results), vec![2, 1]);
}

// Scenario 2: a single category.
#[test]
fn scenario_single_category() {
    let records = alpha_beta();
    let query = QuerySpec::new().with_category(CategoryFilter::from_label("Security"));
    assert_eq!(ids(&filter_and_sort(&records, &query)), vec![2]);
}

// Scenario 3: text search across all categories.
#[test]
fn scenario_search_alpha() {
    let records = alpha_beta();
    let query = QuerySpec::new().with_search("alpha");
    assert_eq!(ids(&filter_and_sort(&records, &query)), vec![1]);
}

// Scenario 4: unknown category is an empty result, not an error.
#[test]
fn scenario_unknown_category() {
    let records = alpha_beta();
    let query = QuerySpec::new().with_category(CategoryFilter::from_label("Nonexistent"));
    assert!(filter_and_sort(&records, &query).is_empty());
}

// Scenario 5: name ordering.
#[test]
fn scenario_name_ascending() {
    let mut records = alpha_beta();
    records.reverse();
    let query = QuerySpec::new().with_sort(SortOrder::NameAsc);
    assert_eq!(ids(&filter_and_sort(&records, &query)), vec![1, 2]);
}

#[test]
fn query_does_not_mutate_input() {
    let records = alpha_beta();
    let before = records.clone();
    let _ = filter_and_sort(&records, &QuerySpec::new().with_sort(SortOrder::NameAsc));
    assert_eq!(records, before);
}

#[test]
fn shipped_content_loads_every_file() {
    let store = shipped_store();
    assert_eq!(store.projects().len(), 6);
    assert_eq!(store.skills().skill_categories.len(), 3);
    assert_eq!(store.skills().skill_categories[0].icon, IconName::Shield);
    assert_eq!(store.certifications().items.len(), 2);
    assert_eq!(
        store.projects_page().filter_placeholder,
        "Search projects or technologies..."
    );
}

#[test]
fn shipped_content_default_order_is_stable() {
    let store = shipped_store();
    let results = store.projects().query(&QuerySpec::new());
    // Projects 2 and 6 share a date and keep load order.
    assert_eq!(ids(&results), vec![1, 3, 2, 6, 5, 4]);

    let asc = store
        .projects()
        .query(&QuerySpec::new().with_sort(SortOrder::DateAsc));
    assert_eq!(ids(&asc), vec![4, 5, 2, 6, 3, 1]);
}

#[test]
fn shipped_content_name_order() {
    let store = shipped_store();
    let results = store
        .projects()
        .query(&QuerySpec::new().with_sort(SortOrder::NameAsc));
    assert_eq!(ids(&results), vec![4, 5, 2, 1, 3, 6]);
}

#[test]
fn shipped_content_featured_view() {
    let store = shipped_store();
    let results = store.projects().query(&QuerySpec::featured());
    // The first three entries of projects.json, as authored.
    assert_eq!(ids(&results), vec![1, 2, 3]);
}

#[test]
fn local_date_times_sort_by_instant_on_disk() -> Result<()> {
    let dir = TempDir::new()?;
    write_data_dir(
        dir.path(),
        &json!([
            {"id": 1, "title": "Old", "description": "", "technologies": ["x"],
             "category": "Cloud", "date": "2020-01-01"},
            {"id": 2, "title": "New", "description": "", "technologies": ["x"],
             "category": "Cloud", "date": "2024-03-15T10:00:00"},
            {"id": 3, "title": "Newer", "description": "", "technologies": ["x"],
             "category": "Cloud", "date": "2024-03-15T10:30"},
            {"id": 4, "title": "Offset", "description": "", "technologies": ["x"],
             "category": "Cloud", "date": "2024-03-15T23:00:00-05:00"},
            {"id": 5, "title": "Utc", "description": "", "technologies": ["x"],
             "category": "Cloud", "date": "2024-03-16T01:00:00Z"}
        ]),
        None,
    )?;
    let index = ProjectIndex::load(&dir.path().join("projects.json"))?;
    assert_eq!(ids(&index.query(&QuerySpec::new())), vec![4, 5, 3, 2, 1]);
    assert_eq!(
        ids(&index.query(&QuerySpec::new().with_sort(SortOrder::DateAsc))),
        vec![1, 2, 3, 5, 4]
    );
    assert_eq!(index.stats().years_active, 2);
    Ok(())
}

#[test]
fn accented_titles_collate_with_their_base_letter() {
    let records: Vec<ProjectRecord> = serde_json::from_value(json!([
        {"id": 1, "title": "Zebra", "description": "", "technologies": ["x"],
         "category": "Cloud", "date": "2024-01-01"},
        {"id": 2, "title": "Édge Router", "description": "", "technologies": ["x"],
         "category": "Cloud", "date": "2024-01-01"},
        {"id": 3, "title": "Firewall", "description": "", "technologies": ["x"],
         "category": "Cloud", "date": "2024-01-01"}
    ]))
    .expect("fixture records");
    let query = QuerySpec::new().with_sort(SortOrder::NameAsc);
    assert_eq!(ids(&filter_and_sort(&records, &query)), vec![2, 3, 1]);
}

#[test]
fn shipped_content_category_and_search_combine() {
    let store = shipped_store();
    let query = QuerySpec::new()
        .with_category(Category::NetworkSecurity)
        .with_search("LINUX");
    assert_eq!(ids(&store.projects().query(&query)), vec![6]);

    let tech = QuerySpec::new().with_search("python");
    assert_eq!(ids(&store.projects().query(&tech)), vec![1, 5]);
}

#[test]
fn facets_follow_search_not_category() {
    let store = shipped_store();
    let query = QuerySpec::new()
        .with_category(Category::Cloud)
        .with_search("python");
    let facets = store.projects().facets(&query);
    assert_eq!(facets.all, 2);
    assert_eq!(facets.count(&CategoryFilter::Only(Category::NetworkSecurity)), 1);
    assert_eq!(facets.count(&CategoryFilter::Only(Category::Cloud)), 1);
    assert_eq!(facets.count(&CategoryFilter::Only(Category::Networking)), 0);

    let unfiltered = facet_counts(store.projects().records(), "");
    assert_eq!(unfiltered.all, 6);
    assert_eq!(unfiltered.count(&CategoryFilter::Only(Category::NetworkSecurity)), 2);
}

#[test]
fn shipped_content_stats() {
    let stats = shipped_store().projects().stats();
    assert_eq!(stats.total_projects, 6);
    assert_eq!(stats.categories, 5);
    assert_eq!(stats.technologies, 15);
    assert_eq!(stats.years_active, 3);
}

#[test]
fn shipped_taxonomy_is_derived() {
    let taxonomy = shipped_store().taxonomy();
    assert_eq!(taxonomy.source, TaxonomySource::Derived);
    assert_eq!(taxonomy.chips.first(), Some(&CategoryFilter::All));
    assert_eq!(taxonomy.chips.len(), 6);
    assert!(taxonomy.gaps().is_empty());
}

#[test]
fn detail_lookup_by_route_param() -> Result<()> {
    let store = shipped_store();
    let id: ProjectId = "3".parse()?;
    let project = store.projects().project(id).expect("project 3");
    assert_eq!(project.title, "SIEM Deployment");
    assert_eq!(project.live_link(), Some("https://siem.example.com"));
    assert_eq!(project.github_link(), Some("https://github.com/example/siem-rollout"));
    assert!(store.projects().project(ProjectId(99)).is_none());
    Ok(())
}

#[test]
fn index_rejects_duplicate_ids_on_disk() -> Result<()> {
    let dir = TempDir::new()?;
    let record = json!({
        "id": 7, "title": "Dup", "description": "", "technologies": ["x"],
        "category": "Cloud", "date": "2024-01-01"
    });
    write_data_dir(dir.path(), &json!([record.clone(), record]), None)?;
    let err = ProjectIndex::load(&dir.path().join("projects.json")).unwrap_err();
    assert!(format!("{err:#}").contains("duplicate project id 7"));
    Ok(())
}

#[test]
fn catalog_query_binary_emits_view_model() -> Result<()> {
    let mut cmd = Command::new(helper_binary("catalog-query"));
    cmd.arg("--data")
        .arg(shipped_data_dir())
        .arg("--category")
        .arg("Network Security")
        .arg("--sort")
        .arg("name");
    let value = stdout_json(&run_command(cmd)?)?;

    let titles: Vec<&str> = value["results"]
        .as_array()
        .expect("results array")
        .iter()
        .filter_map(|r| r["title"].as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["Enterprise Firewall Migration", "Site-to-Site VPN Mesh"]
    );
    assert_eq!(value["summary"]["showing"], 2);
    assert_eq!(value["summary"]["total"], 6);
    assert_eq!(value["summary"]["activeFilters"], true);
    assert_eq!(value["query"]["sortOrder"], "name-asc");
    assert_eq!(value["facets"]["all"], 6);
    Ok(())
}

#[test]
fn catalog_query_binary_featured() -> Result<()> {
    let mut cmd = Command::new(helper_binary("catalog-query"));
    cmd.arg("--data").arg(shipped_data_dir()).arg("--featured");
    let value = stdout_json(&run_command(cmd)?)?;
    let ids: Vec<u64> = value["results"]
        .as_array()
        .expect("results array")
        .iter()
        .filter_map(|r| r["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let mut newest = Command::new(helper_binary("catalog-query"));
    newest
        .arg("--data")
        .arg(shipped_data_dir())
        .arg("--featured")
        .arg("--sort")
        .arg("date-desc");
    let value = stdout_json(&run_command(newest)?)?;
    assert_eq!(value["query"]["sortOrder"], "date-desc");
    assert_eq!(value["results"][0]["id"], 1);
    assert_eq!(value["results"][1]["id"], 3);
    Ok(())
}

#[test]
fn catalog_query_binary_rejects_unknown_sort() -> Result<()> {
    let output = Command::new(helper_binary("catalog-query"))
        .arg("--data")
        .arg(shipped_data_dir())
        .arg("--sort")
        .arg("newest")
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("newest"));
    Ok(())
}

#[test]
fn project_show_binary() -> Result<()> {
    let mut cmd = Command::new(helper_binary("project-show"));
    cmd.arg("--data").arg(shipped_data_dir()).arg("5");
    let value = stdout_json(&run_command(cmd)?)?;
    assert_eq!(value["title"], "AWS Landing Zone");
    assert_eq!(value["category"], "Cloud");

    let missing = Command::new(helper_binary("project-show"))
        .arg("--data")
        .arg(shipped_data_dir())
        .arg("42")
        .output()?;
    assert!(!missing.status.success());
    assert!(String::from_utf8_lossy(&missing.stderr).contains("project not found: 42"));
    Ok(())
}

#[test]
fn catalog_stats_binary_flags_taxonomy_gaps() -> Result<()> {
    let dir = TempDir::new()?;
    write_data_dir(
        dir.path(),
        &json!([
            {"id": 1, "title": "A", "description": "", "technologies": ["AWS"],
             "category": "Cloud", "date": "2024-01-01"},
            {"id": 2, "title": "B", "description": "", "technologies": ["Nmap"],
             "category": "Pentesting", "date": "2022-01-01"}
        ]),
        Some(&json!({"categories": ["All", "Cloud", "Networking"]})),
    )?;

    let mut cmd = Command::new(helper_binary("catalog-stats"));
    cmd.arg("--data").arg(dir.path());
    let value: Value = stdout_json(&run_command(cmd)?)?;
    assert_eq!(value["stats"]["totalProjects"], 2);
    assert_eq!(value["stats"]["yearsActive"], 2);
    assert_eq!(value["taxonomySource"], "configured");
    assert_eq!(value["uncoveredCategories"], json!(["Pentesting"]));
    assert_eq!(value["emptyChips"], json!(["Networking"]));

    let strict = Command::new(helper_binary("catalog-stats"))
        .arg("--data")
        .arg(dir.path())
        .arg("--strict")
        .output()?;
    assert!(!strict.status.success());
    assert!(String::from_utf8_lossy(&strict.stderr).contains("Pentesting"));
    Ok(())
}
