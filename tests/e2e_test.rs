//! End-to-end tests for the TechByBookk binary workflow.

use anyhow::Result;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Tests full binary execution generates valid output.
#[test]
fn test_full_workflow_e2e() -> Result<()> {
    // Arrange
    let temp_output = TempDir::new()?;
    let output_path = temp_output.path();

    // Act
    let status = Command::new("cargo")
        .args([
            "run",
            "--manifest-path",
            "Cargo.toml",
            "--",
            "-o",
            output_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Test output path should be valid UTF8"))?,
            "--no-open",
        ])
        .status()?;

    // Assert
    assert!(status.success(), "Binary should exit successfully");

    let index_path = output_path.join("index.html");
    assert!(index_path.exists(), "Home page should be created");

    let html_content = fs::read_to_string(&index_path)?;
    assert!(
        html_content.contains("TechByBookk"),
        "Home page should carry the default site name"
    );
    assert!(
        html_content.contains("Featured Articles"),
        "Home page should show the featured section"
    );

    assert!(
        output_path.join("blog").join("index.html").exists(),
        "Blog index should be created"
    );
    assert!(
        output_path
            .join("blog")
            .join("ai-revolution-2025.html")
            .exists(),
        "Seeded article pages should be created"
    );
    assert!(
        output_path.join("blog").join("not-found.html").exists(),
        "Not-found page should be created"
    );
    assert!(
        output_path.join("assets").join("home.css").exists(),
        "CSS assets should be written"
    );

    Ok(())
}

/// Tests binary execution with a site name override.
#[test]
fn test_site_name_override_e2e() -> Result<()> {
    // Arrange
    let temp_output = TempDir::new()?;
    let output_path = temp_output.path();

    // Act
    let status = Command::new("cargo")
        .args([
            "run",
            "--manifest-path",
            "Cargo.toml",
            "--",
            "-o",
            output_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Test output path should be valid UTF8"))?,
            "--name",
            "E2E Blog",
            "--no-open",
        ])
        .status()?;

    // Assert
    assert!(status.success(), "Binary should exit successfully");

    let html_content = fs::read_to_string(output_path.join("index.html"))?;
    assert!(
        html_content.contains("E2E Blog"),
        "Overridden site name should appear in output"
    );

    Ok(())
}
