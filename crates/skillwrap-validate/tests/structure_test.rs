use std::fs;

use skillwrap_validate::structure::StructureValidator;
use skillwrap_validate::validator::SkillValidator;
use tempfile::TempDir;

fn make_skill_dir(dir: &TempDir) {
    fs::write(
        dir.path().join("SKILL.md"),
        "---\nname: test-skill\ndescription: A test skill\n---\n# Test\n",
    )
    .unwrap();
    fs::write(dir.path().join("guide.md"), "# Guide\n").unwrap();
}

#[test]
fn well_formed_skill_passes() {
    let dir = TempDir::new().unwrap();
    make_skill_dir(&dir);

    let verdict = StructureValidator::default().validate(dir.path());
    assert!(verdict.valid, "{}", verdict.message);
    assert!(verdict.message.contains("2 files"));
}

#[test]
fn empty_skill_md_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("SKILL.md"), "  \n").unwrap();

    let verdict = StructureValidator::default().validate(dir.path());
    assert!(!verdict.valid);
    assert!(verdict.message.contains("empty"));
}

#[test]
fn missing_skill_md_fails() {
    let dir = TempDir::new().unwrap();

    let verdict = StructureValidator::default().validate(dir.path());
    assert!(!verdict.valid);
    assert!(verdict.message.contains("SKILL.md"));
}

#[test]
fn oversized_content_fails() {
    let dir = TempDir::new().unwrap();
    make_skill_dir(&dir);
    fs::write(dir.path().join("big.md"), vec![b'x'; 4096]).unwrap();

    let verdict = StructureValidator::with_max_total_bytes(1024).validate(dir.path());
    assert!(!verdict.valid);
    assert!(verdict.message.contains("maximum"));
}

#[test]
fn excluded_subtrees_do_not_count_against_the_cap() {
    let dir = TempDir::new().unwrap();
    make_skill_dir(&dir);
    let git_dir = dir.path().join(".git");
    fs::create_dir(&git_dir).unwrap();
    fs::write(git_dir.join("pack"), vec![b'x'; 8192]).unwrap();

    let verdict = StructureValidator::with_max_total_bytes(1024).validate(dir.path());
    assert!(verdict.valid, "{}", verdict.message);
}
