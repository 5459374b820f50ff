//! Behavioral specs for `crank release`.

use crate::prelude::*;

/// A project one edit away from release 1.4.2: the version bump is in the
/// working tree, a bare `origin` is wired up, and uv/keyring are shimmed.
fn release_project() -> Project {
    let project = Project::empty();
    project.file(
        "pyproject.toml",
        "[project]\nname = \"taskcheck\"\nversion = \"1.4.1\"\n",
    );
    init_repo(&project);

    let remote = project.path().join("remote.git");
    std::fs::create_dir(&remote).expect("remote dir");
    git(&remote, &["init", "--bare"]);
    git(
        project.path(),
        &["remote", "add", "origin", &remote.display().to_string()],
    );

    project.file(
        "pyproject.toml",
        "[project]\nname = \"taskcheck\"\nversion = \"1.4.2\"\n",
    );
    project.fake_uv("");
    project.fake_keyring("tok-abc");
    project
}

#[test]
fn full_sequence_commits_tags_pushes_builds_and_publishes() {
    let project = release_project();

    crank_cmd()
        .arg("release")
        .current_dir(project.path())
        .env("PATH", project.bin_first_path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Published version 1.4.2"));

    // Commit message, tag name, and tag message carry the same version.
    let subject = git(project.path(), &["log", "-1", "--format=%s"]);
    assert_eq!(subject.trim(), "Release 1.4.2");
    let tags = git(project.path(), &["tag", "-l", "-n1", "v1.4.2"]);
    assert!(tags.contains("Release 1.4.2"));

    // Exactly the tag was pushed to origin.
    let remote_tags = git(&project.path().join("remote.git"), &["tag", "-l"]);
    assert_eq!(remote_tags.trim(), "v1.4.2");

    // Build, then publish with the fetched token.
    let log = project.uv_log();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines, vec!["build", "publish --token tok-abc"]);
    assert!(project.keyring_log().contains("get pypi 00sapo"));
}

#[test]
fn outside_a_git_repository_nothing_happens() {
    let project = Project::python();
    project.fake_uv("");

    crank_cmd()
        .arg("release")
        .current_dir(project.path())
        .env("PATH", project.bin_first_path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("git repository"));

    assert_eq!(project.uv_log(), "");
}

#[test]
fn missing_manifest_aborts_before_any_git_step() {
    let project = Project::empty();
    project.file("README.md", "no manifest here\n");
    init_repo(&project);
    project.fake_uv("");

    crank_cmd()
        .arg("release")
        .current_dir(project.path())
        .env("PATH", project.bin_first_path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("pyproject.toml"));

    // The initial commit is still the only one.
    let count = git(project.path(), &["rev-list", "--count", "HEAD"]);
    assert_eq!(count.trim(), "1");
}

/// The first failing step aborts the rest; earlier steps are not rolled back.
#[test]
fn failed_build_stops_before_publish() {
    let project = release_project();
    project.fake_uv("if [ \"$1\" = build ]; then exit 1; fi");

    crank_cmd()
        .arg("release")
        .current_dir(project.path())
        .env("PATH", project.bin_first_path())
        .assert()
        .code(1);

    assert!(!project.uv_log().contains("publish"));
    assert_eq!(project.keyring_log(), "");

    // Commit and tag were already created and stay in place.
    let subject = git(project.path(), &["log", "-1", "--format=%s"]);
    assert_eq!(subject.trim(), "Release 1.4.2");
    assert_eq!(git(project.path(), &["tag", "-l", "v1.4.2"]).trim(), "v1.4.2");
}

#[test]
fn failed_push_stops_before_build() {
    let project = release_project();
    git(project.path(), &["remote", "remove", "origin"]);

    crank_cmd()
        .arg("release")
        .current_dir(project.path())
        .env("PATH", project.bin_first_path())
        .assert()
        .code(1);

    assert_eq!(project.uv_log(), "");
}

/// The remote for the tag push comes from crank.toml.
#[test]
fn configured_remote_receives_the_tag() {
    let project = release_project();
    git(project.path(), &["remote", "rename", "origin", "upstream"]);
    project.file("crank.toml", "[release]\nremote = \"upstream\"\n");

    crank_cmd()
        .arg("release")
        .current_dir(project.path())
        .env("PATH", project.bin_first_path())
        .assert()
        .success();

    let remote_tags = git(&project.path().join("remote.git"), &["tag", "-l"]);
    assert_eq!(remote_tags.trim(), "v1.4.2");
}
