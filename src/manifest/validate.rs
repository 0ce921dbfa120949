//! Structural validation of suite manifests.

use crate::manifest::error::{ManifestError, ManifestFailure, ManifestInvalid};
use crate::manifest::tree::ManifestNode;
use tracing::debug;

/// Check a suite manifest against every invariant needed to consume it.
///
/// Failures are accumulated and reported together, except that the first
/// resource missing `id`/`version` (or location missing `authority`) stops
/// validation with whatever was collected up to that point.
pub fn validate(suite: &ManifestNode) -> Result<(), ManifestInvalid> {
    let mut failures = Vec::new();

    // 1) Collect xform -> resource -> location in one pass.
    let xforms: Vec<&ManifestNode> = suite.children_tagged("xform").collect();
    let resources: Vec<&ManifestNode> = xforms
        .iter()
        .flat_map(|xform| xform.children_tagged("resource"))
        .collect();
    let locations: Vec<&ManifestNode> = resources
        .iter()
        .flat_map(|resource| resource.children_tagged("location"))
        .collect();

    // 2) Suite-level checks.
    if suite.tag != "suite" {
        fail(ManifestFailure::SuiteNotAtRoot, &mut failures);
    }
    if !suite.has_attr("version") {
        fail(ManifestFailure::MissingSuiteVersion, &mut failures);
    }
    if xforms.is_empty() {
        fail(ManifestFailure::NoXforms, &mut failures);
    } else if xforms.len() != resources.len() {
        fail(ManifestFailure::ResourceCountMismatch, &mut failures);
    }

    // 3) Resource and location attributes. These stop at the first miss.
    if !resources.is_empty() {
        for resource in &resources {
            if !resource.has_attr("id") {
                fail(ManifestFailure::MissingResourceId, &mut failures);
                return Err(ManifestInvalid { failures });
            }
            if !resource.has_attr("version") {
                fail(ManifestFailure::MissingResourceVersion, &mut failures);
                return Err(ManifestInvalid { failures });
            }
        }

        for location in &locations {
            if !location.has_attr("authority") {
                fail(ManifestFailure::MissingLocationAuthority, &mut failures);
                return Err(ManifestInvalid { failures });
            }
        }

        // 4) Exactly one remote location per resource.
        let remote = locations
            .iter()
            .filter(|location| location.attr("authority") == Some("remote"))
            .count();
        if remote != resources.len() {
            fail(ManifestFailure::RemoteLocationCountMismatch, &mut failures);
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ManifestInvalid { failures })
    }
}

fn fail(failure: ManifestFailure, failures: &mut Vec<ManifestFailure>) {
    debug!(%failure, "manifest check failed");
    failures.push(failure);
}

/// Parse manifest XML and validate it.
pub fn validate_xml(text: &str) -> Result<ManifestNode, ManifestError> {
    let suite = ManifestNode::parse_xml(text)?;
    validate(&suite)?;
    Ok(suite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failures(xml: &str) -> Vec<ManifestFailure> {
        match validate_xml(xml) {
            Err(ManifestError::Invalid(invalid)) => invalid.failures,
            other => panic!("expected invalid manifest, got {other:?}"),
        }
    }

    #[test]
    fn foreign_root_reports_every_suite_level_failure() {
        assert_eq!(
            failures("<foo></foo>"),
            vec![
                ManifestFailure::SuiteNotAtRoot,
                ManifestFailure::MissingSuiteVersion,
                ManifestFailure::NoXforms,
            ]
        );
    }

    #[test]
    fn bare_suite_lacks_version_and_xforms() {
        assert_eq!(
            failures("<suite></suite>"),
            vec![
                ManifestFailure::MissingSuiteVersion,
                ManifestFailure::NoXforms,
            ]
        );
    }

    #[test]
    fn one_xform_without_resource_is_a_count_mismatch() {
        let found = failures(
            r#"<suite version="1">
                 <xform><resource id="" version=""><location authority="remote">x</location></resource></xform>
                 <xform></xform>
               </suite>"#,
        );
        assert_eq!(found, vec![ManifestFailure::ResourceCountMismatch]);
    }

    #[test]
    fn two_resources_in_one_xform_is_a_count_mismatch() {
        let found = failures(
            r#"<suite version="1"><xform>
                 <resource id="a" version="1"><location authority="remote">a</location></resource>
                 <resource id="b" version="1"><location authority="remote">b</location></resource>
               </xform></suite>"#,
        );
        assert_eq!(found, vec![ManifestFailure::ResourceCountMismatch]);
    }

    #[test]
    fn missing_resource_id_stops_before_location_checks() {
        // No version on suite and no locations: only failures gathered before
        // the short-circuit are reported.
        assert_eq!(
            failures("<suite><xform><resource></resource></xform></suite>"),
            vec![
                ManifestFailure::MissingSuiteVersion,
                ManifestFailure::MissingResourceId,
            ]
        );
    }

    #[test]
    fn missing_resource_version_short_circuits() {
        assert_eq!(
            failures(r#"<suite version="2"><xform><resource id=""></resource></xform></suite>"#),
            vec![ManifestFailure::MissingResourceVersion]
        );
    }

    #[test]
    fn missing_authority_short_circuits() {
        assert_eq!(
            failures(
                r#"<suite version="2"><xform><resource id="" version="">
                     <location></location>
                   </resource></xform></suite>"#
            ),
            vec![ManifestFailure::MissingLocationAuthority]
        );
    }

    #[test]
    fn resource_without_remote_location_fails() {
        assert_eq!(
            failures(
                r#"<suite version="2"><xform><resource id="" version="">
                     <location authority="local">./a</location>
                   </resource></xform></suite>"#
            ),
            vec![ManifestFailure::RemoteLocationCountMismatch]
        );
    }

    #[test]
    fn accepts_well_formed_suite() {
        let suite = ManifestNode::new("suite").with_attr("version", "3").with_child(
            ManifestNode::new("xform").with_child(
                ManifestNode::new("resource")
                    .with_attr("id", "f")
                    .with_attr("version", "3")
                    .with_child(
                        ManifestNode::new("location")
                            .with_attr("authority", "local")
                            .with_text("./f.xml"),
                    )
                    .with_child(
                        ManifestNode::new("location")
                            .with_attr("authority", "remote")
                            .with_text("./f.xml"),
                    ),
            ),
        );
        assert_eq!(validate(&suite), Ok(()));
    }
}
