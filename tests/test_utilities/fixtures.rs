use chrono::{TimeZone, Utc};
use cyclonedx_lib::model::*;

pub const SETUPTOOLS_PURL: &str = "pkg:pypi/setuptools@50.3.2?extension=tar.gz";
pub const SETUPTOOLS_SHA256: &str =
    "2a3d6cb2d5b5bf2e3c0f6d0a1e3c8c5f7f6b1e0a9d7c4b5a6f8e9d0c1b2a3f4e";
const TOOL_SHA1: &str = "0123456789abcdef0123456789abcdef01234567";

/// The single-component BOM used by the end-to-end scenarios
pub fn setuptools_bom() -> Bom {
    Bom::new().with_component(
        Component::new("setuptools")
            .with_version("50.3.2")
            .with_bom_ref(SETUPTOOLS_PURL)
            .with_purl(SETUPTOOLS_PURL)
            .with_hash(HashType::new(HashAlgorithm::Sha256, SETUPTOOLS_SHA256))
            .with_license(LicenseChoice::License(License::spdx("MIT"))),
    )
}

/// A BOM whose metadata lists a tool carrying external references
pub fn bom_with_tool_references() -> Bom {
    let repository = ExternalReference::new(
        ExternalReferenceType::Vcs,
        "https://github.com/CycloneDX/cyclonedx-python-lib",
    )
    .with_comment("source repository");
    let mut tool = Tool::new("CycloneDX", "cyclonedx-python-lib", "1.0.0")
        .with_external_reference(repository);
    let sha1 = HashType::new(HashAlgorithm::Sha1, TOOL_SHA1);
    tool.hashes.push(sha1);

    let mut bom = Bom::new();
    bom.metadata.tools = vec![tool];
    bom
}

/// A BOM touching every part of the model that CycloneDX 1.4 can express
pub fn full_bom() -> Bom {
    let mut bom = Bom::new();
    bom.version = 3;
    bom.metadata.timestamp = Some(Utc.with_ymd_and_hms(2023, 1, 7, 13, 44, 32).unwrap());
    bom.metadata.authors = vec![OrganizationalContact {
        name: Some("A Maintainer".to_string()),
        email: Some("maintainer@example.com".to_string()),
        phone: None,
    }];
    bom.metadata.component = Some(
        Component::new("cyclonedx-demo")
            .with_type(ComponentType::Application)
            .with_version("1.0.0")
            .with_bom_ref("demo-app"),
    );
    bom.metadata.manufacture = Some(OrganizationalEntity {
        name: Some("Example Corp".to_string()),
        urls: vec!["https://example.com".to_string()],
        contacts: vec![OrganizationalContact::named("Support Desk")],
    });
    bom.metadata.supplier = Some(OrganizationalEntity::named("Example Supplier"));
    bom.metadata.licenses = vec![LicenseChoice::Expression("Apache-2.0 OR MIT".to_string())];
    bom.metadata.properties = vec![Property::new("build", "nightly")];

    let mut release_notes = ReleaseNotes::new("major");
    release_notes.title = Some("Big release".to_string());
    release_notes.timestamp = Some(Utc.with_ymd_and_hms(2022, 12, 1, 8, 0, 0).unwrap());
    release_notes.aliases = vec!["First Test Release".to_string()];
    release_notes.tags = vec!["test".to_string(), "alpha".to_string()];
    release_notes.notes = vec![Note {
        locale: Some("en-GB".to_string()),
        text: "Some release notes".to_string(),
    }];
    release_notes.properties = vec![Property::new("channel", "stable")];

    let mut component = Component::new("setuptools")
        .with_version("50.3.2")
        .with_bom_ref(SETUPTOOLS_PURL)
        .with_purl(SETUPTOOLS_PURL)
        .with_hash(HashType::new(HashAlgorithm::Sha256, SETUPTOOLS_SHA256))
        .with_license(LicenseChoice::License(License::spdx("MIT")))
        .with_external_reference(
            ExternalReference::new(
                ExternalReferenceType::Distribution,
                "https://pypi.org/project/setuptools/50.3.2",
            )
            .with_comment("PyPI")
            .with_hash(HashType::new(HashAlgorithm::Sha256, SETUPTOOLS_SHA256)),
        )
        .with_component(
            Component::new("pkg_resources")
                .with_type(ComponentType::Framework)
                .with_version("50.3.2")
                .with_bom_ref("pkg-resources"),
        );
    component.author = Some("Python Packaging Authority".to_string());
    component.supplier = Some(OrganizationalEntity::named("PyPA"));
    component.mime_type = Some("application/x-tar".to_string());
    component.scope = Some(ComponentScope::Required);
    component.copyright = Some("Copyright 2020 PyPA".to_string());
    component.cpe = Some("cpe:2.3:a:python:setuptools:50.3.2:*:*:*:*:*:*:*".to_string());
    component.properties = vec![Property::new("origin", "pypi")];
    component.release_notes = Some(release_notes);

    let mut service = Service::new("package-index").with_bom_ref("pypi-service");
    service.provider = Some(OrganizationalEntity::named("PSF"));
    service.version = Some("2".to_string());
    service.endpoints = vec!["https://pypi.org/simple".to_string()];
    service.authenticated = Some(false);
    service.x_trust_boundary = Some(true);
    service.data = vec![DataClassification::new(DataFlow::Outbound, "public")];
    service.properties = vec![Property::new("region", "global")];
    let service = service.with_service(Service::new("mirror").with_bom_ref("pypi-mirror"));

    bom = bom.with_component(component).with_service(service);
    bom.external_references.push(ExternalReference::new(
        ExternalReferenceType::Website,
        "https://cyclonedx.org",
    ));
    bom.dependencies.push(
        Dependency::new("demo-app")
            .with_depends_on(SETUPTOOLS_PURL)
            .with_depends_on("pypi-service"),
    );
    bom.dependencies
        .push(Dependency::new(SETUPTOOLS_PURL).with_depends_on("pkg-resources"));

    let mut vulnerability = Vulnerability::new("CVE-2022-40897")
        .with_rating(VulnerabilityRating {
            source: Some(VulnerabilitySource::new("NVD", "https://nvd.nist.gov")),
            score: Some(5.9),
            severity: Some(Severity::Medium),
            method: Some(ScoreMethod::CvssV31),
            vector: Some("AV:N/AC:H/PR:N/UI:N/S:U/C:N/I:N/A:H".to_string()),
            justification: None,
        })
        .with_bom_ref("vuln-1");
    vulnerability.cwes = vec![1333];
    vulnerability.description = Some("Regular expression denial of service".to_string());
    vulnerability.recommendation = Some("Upgrade to 65.5.1".to_string());
    let advisory = Advisory::new("https://github.com/advisories/GHSA-r9hx-vwmv-q579");
    vulnerability.advisories = vec![advisory];
    vulnerability.published = Some(Utc.with_ymd_and_hms(2022, 12, 23, 0, 15, 0).unwrap());
    let target = bom.components[0].bom_ref.clone();
    bom.vulnerabilities.push(vulnerability.affecting(&target));
    bom
}
