// rolesieve/tests/build_integration_tests.rs
//! Integration tests for the `rolesieve` executable.
//!
//! Each test lays out a throwaway project in a temporary directory (a
//! `tex-files/` source tree and a `templates/` directory holding the layout
//! style file), runs the binary against it and inspects the build tree.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const RESUME: &str = r"\documentclass{article}
\input{role-def}
\begin{document}
\name{Jordan Doe}
\begin{highlights}
  \rolecontent{qr,qd}{\item Led a team of 5}
  \rolecontent{tech}{\item Rebuilt the pricing engine}
\end{highlights}
\begin{rolecontent}{soleng}
Ran customer workshops.
\end{rolecontent}
Phone: \exclude{private} +1 555 0100
\end{document}
";

const COVER: &str = r"Dear hiring team,
\rolecontent{qd}{I enjoy data work.}
Regards
";

const STYLE: &str = "% resume layout\n\\ProvidesPackage{resume-layout}\n";

/// Creates `tex-files/` with two documents and a sibling `templates/` directory.
fn project() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let src = dir.path().join("tex-files");
    fs::create_dir(&src)?;
    fs::write(src.join("resume.tex"), RESUME)?;
    fs::write(src.join("cover.tex"), COVER)?;
    fs::write(src.join("README.md"), "not a tex file")?;

    let templates = dir.path().join("templates");
    fs::create_dir(&templates)?;
    fs::write(templates.join("resume-layout.sty"), STYLE)?;
    Ok(dir)
}

fn rolesieve(project: &Path) -> Result<Command> {
    let mut cmd = Command::cargo_bin("rolesieve")?;
    cmd.current_dir(project)
        .env_remove("ROLESIEVE_CONFIG")
        .env("RUST_LOG", "info");
    Ok(cmd)
}

#[test]
fn builds_every_configured_role() -> Result<()> {
    let dir = project()?;
    rolesieve(dir.path())?
        .assert()
        .success()
        .stderr(predicate::str::contains("Building role: qr"))
        .stderr(predicate::str::contains("Built 4 role(s)."));

    for role in ["qr", "qd", "tech", "soleng"] {
        let out = dir.path().join("build").join(role);
        assert!(out.join("resume.tex").is_file(), "missing resume for {role}");
        assert!(out.join("cover.tex").is_file(), "missing cover for {role}");
        assert!(!out.join("README.md").exists());
        assert_eq!(fs::read_to_string(out.join("resume-layout.sty"))?, STYLE);
        assert_eq!(
            fs::read_to_string(out.join("role-def.tex"))?,
            format!("\\def\\buildrole{{{role}}}\n\\def\\includelocation{{false}}\n")
        );
    }
    Ok(())
}

#[test]
fn filtered_documents_match_their_role() -> Result<()> {
    let dir = project()?;
    rolesieve(dir.path())?.assert().success();
    let build = dir.path().join("build");

    let qr = fs::read_to_string(build.join("qr").join("resume.tex"))?;
    assert!(qr.contains("  \\item Led a team of 5\n"));
    assert!(!qr.contains("pricing engine"));
    assert!(!qr.contains("customer workshops"));
    assert!(!qr.contains("Phone"));
    assert!(!qr.contains("rolecontent"));

    let soleng = fs::read_to_string(build.join("soleng").join("resume.tex"))?;
    assert!(soleng.contains("Ran customer workshops.\n"));
    assert!(!soleng.contains("highlights"), "empty highlights should be removed");

    let qd_cover = fs::read_to_string(build.join("qd").join("cover.tex"))?;
    assert_eq!(qd_cover, "Dear hiring team,\nI enjoy data work.\nRegards\n");
    let tech_cover = fs::read_to_string(build.join("tech").join("cover.tex"))?;
    assert_eq!(tech_cover, "Dear hiring team,\nRegards\n");
    Ok(())
}

#[test]
fn single_role_writes_straight_into_output_dir() -> Result<()> {
    let dir = project()?;
    rolesieve(dir.path())?
        .args(["--role", "tech", "--output-dir", "out"])
        .assert()
        .success();

    let out = dir.path().join("out");
    assert!(out.join("resume.tex").is_file());
    assert!(out.join("role-def.tex").is_file());
    assert!(!out.join("tech").exists());
    let resume = fs::read_to_string(out.join("resume.tex"))?;
    assert!(resume.contains("pricing engine"));
    Ok(())
}

#[test]
fn unknown_role_is_a_usage_error() -> Result<()> {
    let dir = project()?;
    rolesieve(dir.path())?
        .args(["--roles", "qr", "qd", "--role", "manager"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("manager"))
        .stderr(predicate::str::contains("qr, qd"));

    assert!(!dir.path().join("build").exists());
    Ok(())
}

#[test]
fn roles_override_limits_the_build() -> Result<()> {
    let dir = project()?;
    rolesieve(dir.path())?
        .args(["--roles", "qr,tech"])
        .assert()
        .success();

    let build = dir.path().join("build");
    assert!(build.join("qr").is_dir());
    assert!(build.join("tech").is_dir());
    assert!(!build.join("qd").exists());
    assert!(!build.join("soleng").exists());
    Ok(())
}

#[test]
fn include_location_is_recorded_in_role_definition() -> Result<()> {
    let dir = project()?;
    rolesieve(dir.path())?
        .args(["--role", "qr", "--include-location"])
        .assert()
        .success();

    let marker = fs::read_to_string(dir.path().join("build").join("role-def.tex"))?;
    assert_eq!(marker, "\\def\\buildrole{qr}\n\\def\\includelocation{true}\n");
    Ok(())
}

#[test]
fn missing_style_asset_is_not_an_error() -> Result<()> {
    let dir = project()?;
    fs::remove_dir_all(dir.path().join("templates"))?;
    rolesieve(dir.path())?.args(["--role", "qd"]).assert().success();

    let build = dir.path().join("build");
    assert!(build.join("resume.tex").is_file());
    assert!(!build.join("resume-layout.sty").exists());
    Ok(())
}

#[test]
fn missing_source_dir_fails() -> Result<()> {
    let dir = TempDir::new()?;
    rolesieve(dir.path())?
        .args(["--source-dir", "nowhere"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read source directory"));
    Ok(())
}

#[test]
fn config_file_changes_roles_and_markup() -> Result<()> {
    let dir = TempDir::new()?;
    let src = dir.path().join("tex-files");
    fs::create_dir(&src)?;
    fs::write(
        src.join("cv.tex"),
        "\\only{intern}{Summer project}\n\\only{senior}{Tech lead}\nFooter\n",
    )?;
    let config = dir.path().join("build.yaml");
    fs::write(
        &config,
        "roles: [intern, senior]\nmarker_file: variant.tex\nmarkup:\n  region: only\n",
    )?;

    rolesieve(dir.path())?
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let intern = fs::read_to_string(dir.path().join("build").join("intern").join("cv.tex"))?;
    assert_eq!(intern, "Summer project\nFooter\n");
    assert!(dir.path().join("build").join("senior").join("variant.tex").is_file());
    Ok(())
}

#[test]
fn invalid_config_file_fails() -> Result<()> {
    let dir = project()?;
    let config = dir.path().join("bad.yaml");
    fs::write(&config, "roles: [qr, qr]\n")?;
    rolesieve(dir.path())?
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate role"));
    Ok(())
}

#[test]
fn simple_passes_leave_exclude_markup() -> Result<()> {
    let dir = project()?;
    rolesieve(dir.path())?
        .args(["--role", "qr", "--passes", "simple"])
        .assert()
        .success();

    let resume = fs::read_to_string(dir.path().join("build").join("resume.tex"))?;
    assert!(resume.contains("Phone: \\exclude{private} +1 555 0100"));
    assert!(resume.contains("\\item Led a team of 5"));
    Ok(())
}

#[test]
fn quiet_prints_no_summary() -> Result<()> {
    let dir = project()?;
    rolesieve(dir.path())?
        .args(["--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    Ok(())
}
