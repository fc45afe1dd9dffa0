use skillcheck::report::{Tally, group_by_section, render_text};

use crate::fixture::TestPackage;

#[test]
fn empty_package_report() {
    let package = TestPackage::new("empty-skill");
    let analysis = package.analyze();

    insta::assert_snapshot!(render_text(&analysis.package, &analysis.records, false), @r"
    === Skill Analysis: empty-skill ===

    STRUCTURE
      SKILL.md exists: FAIL: SKILL.md not found

    SUMMARY: 1 FAIL, 0 WARN, 0 PASS
    ");
}

#[cfg(unix)]
#[test]
fn full_package_report() {
    let package = TestPackage::new("pdf-helper");
    package
        .skill_md(
            "# Attribution: Example Corp\n\
             ---\n\
             name: pdf-helper\n\
             description: Extracts text and tables from PDF files for downstream processing.\n\
             ---\n\
             # PDF Helper\n\
             \n\
             Read [the guide](references/guide.md) before running [the script](scripts/extract.sh).\n\
             See [docs](https://example.com) and [missing](references/gone.md).\n",
        )
        .file("references/guide.md", "guide")
        .file("references/extra.md", "extra")
        .file("README.md", "readme")
        .script("scripts/extract.sh", true);
    let analysis = package.analyze();

    insta::assert_snapshot!(render_text(&analysis.package, &analysis.records, false), @r"
    === Skill Analysis: pdf-helper ===

    STRUCTURE
      SKILL.md exists: PASS

    FRONTMATTER
      Valid frontmatter: PASS
      No unexpected keys: PASS
      Name valid: PASS: pdf-helper
      Description length: PASS: 66 chars

    SIZE
      SKILL.md line count: PASS: 9 lines
      Body word count: PASS: 14 words

    FILES
      Directories: INFO: references, scripts
      Total files: INFO: 5
      Extraneous files: WARN: README.md

    REFERENCES
      Link integrity: FAIL: Broken: references/gone.md
      Unlinked reference files: WARN: extra.md

    SCRIPTS
      Scripts found: INFO: 1
      extract.sh executable: PASS

    SUMMARY: 1 FAIL, 2 WARN, 8 PASS
    ");
}

#[test]
fn summary_matches_record_counts() {
    let package = TestPackage::minimal("counted-skill");
    package.file("README.md", "readme");
    let analysis = package.analyze();
    let tally = Tally::from_records(&analysis.records);

    let total: usize = group_by_section(&analysis.records)
        .iter()
        .map(|group| group.records.len())
        .sum();
    assert_eq!(total, analysis.records.len());
    assert_eq!(tally.fail + tally.warn + tally.pass + tally.info, total);

    let text = render_text(&analysis.package, &analysis.records, false);
    assert!(text.ends_with(&tally.summary_line()));
    assert_eq!(text.matches("SUMMARY:").count(), 1);
}

#[test]
fn colored_report_strips_to_plain() {
    let package = TestPackage::minimal("colored-skill");
    package.file("README.md", "readme");
    let analysis = package.analyze();

    let colored = render_text(&analysis.package, &analysis.records, true);
    let plain = render_text(&analysis.package, &analysis.records, false);
    assert_ne!(colored, plain);
    assert_eq!(console::strip_ansi_codes(&colored), plain);
}
