//! Integration tests for extraction over the backend's real `main.go`.

use std::path::Path;
use tsgen_core::{Diagnostic, HttpMethod, PayloadType, RouteConfig, TypeExpr};
use tsgen_source::{Extractor, RouteTable};

const BACKEND: &str = include_str!("fixtures/backend.go");

// ============================================================================
// Records
// ============================================================================

#[test]
fn test_backend_records_in_source_order() {
    let routes = RouteTable::builtin();
    let extraction = Extractor::new(&routes).extract(BACKEND).unwrap();

    assert_eq!(extraction.package, "main");
    let names: Vec<_> = extraction.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "User",
            "Project",
            "Milestone",
            "Invite",
            "InviteUsage",
            "AuthRequest",
            "AuthResponse"
        ]
    );
}

#[test]
fn test_backend_user_fields() {
    let routes = RouteTable::builtin();
    let extraction = Extractor::new(&routes).extract(BACKEND).unwrap();
    let user = extraction.record("User").unwrap();

    let wire: Vec<_> = user.fields.iter().map(|f| f.serialized_name.as_str()).collect();
    assert_eq!(wire, ["id", "email", "name", "bio", "created_at", "updated_at"]);
    assert!(user.fields.iter().all(|f| f.required));

    assert_eq!(user.field("ID").unwrap().type_expr, TypeExpr::named("uint"));
    assert_eq!(
        user.field("Bio").unwrap().type_expr,
        TypeExpr::pointer(TypeExpr::named("string"))
    );
    assert_eq!(
        user.field("CreatedAt").unwrap().type_expr,
        TypeExpr::qualified("time", "Time")
    );
}

#[test]
fn test_backend_nested_record_references() {
    let routes = RouteTable::builtin();
    let extraction = Extractor::new(&routes).extract(BACKEND).unwrap();

    let invite = extraction.record("Invite").unwrap();
    assert_eq!(invite.field("Inviter").unwrap().type_expr, TypeExpr::named("User"));
    assert_eq!(
        invite.field("LastUsedAt").unwrap().type_expr.to_string(),
        "*time.Time"
    );
    assert_eq!(invite.field("CurrentUses").unwrap().serialized_name, "current_uses");

    let auth = extraction.record("AuthRequest").unwrap();
    assert_eq!(auth.field("InviteCode").unwrap().serialized_name, "inviteCode");
}

// ============================================================================
// Endpoints
// ============================================================================

#[test]
fn test_backend_endpoints() {
    let routes = RouteTable::builtin();
    let extraction = Extractor::new(&routes).extract(BACKEND).unwrap();

    let handlers: Vec<_> = extraction
        .endpoints
        .iter()
        .map(|e| e.handler_name.as_str())
        .collect();
    assert_eq!(
        handlers,
        [
            "handleAuthInvite",
            "handleGetUser",
            "handleGetProjects",
            "handleGetProject"
        ]
    );

    let invite = extraction.endpoint("handleAuthInvite").unwrap();
    assert_eq!(invite.method, HttpMethod::Post);
    assert_eq!(invite.request_type, PayloadType::parse("AuthRequest"));
    assert_eq!(invite.response_type, PayloadType::parse("AuthResponse"));

    let projects = extraction.endpoint("handleGetProjects").unwrap();
    assert_eq!(projects.response_type, PayloadType::ArrayOf("Project".to_string()));
}

#[test]
fn test_backend_has_no_diagnostics() {
    let routes = RouteTable::builtin();
    let extraction = Extractor::new(&routes).extract(BACKEND).unwrap();
    assert!(extraction.diagnostics.is_empty(), "{:?}", extraction.diagnostics);
}

#[test]
fn test_configured_route_resolves_new_handler() {
    let routes = RouteTable::with_overrides(&[RouteConfig {
        handler: "handleGetMilestones".to_string(),
        method: "GET".to_string(),
        path: "/api/projects/:id/milestones".to_string(),
        request: "void".to_string(),
        response: "Milestone[]".to_string(),
    }])
    .unwrap();

    let source = format!(
        "{BACKEND}\nfunc handleGetMilestones(c *fiber.Ctx) error {{\n\treturn c.JSON([]Milestone{{}})\n}}\n"
    );
    let extraction = Extractor::new(&routes).extract(&source).unwrap();

    assert_eq!(extraction.endpoints.len(), 5);
    let milestones = extraction.endpoint("handleGetMilestones").unwrap();
    assert_eq!(milestones.path, "/api/projects/:id/milestones");
    assert!(extraction.diagnostics.is_empty());
}

#[test]
fn test_unknown_handler_is_reported_not_fatal() {
    let routes = RouteTable::builtin();
    let source = format!("{BACKEND}\nfunc handleDeleteProject(c *fiber.Ctx) error {{ return nil }}\n");
    let extraction = Extractor::new(&routes).extract(&source).unwrap();

    assert_eq!(extraction.endpoints.len(), 4);
    assert_eq!(
        extraction.diagnostics,
        vec![Diagnostic::UnresolvedHandler {
            handler: "handleDeleteProject".to_string()
        }]
    );
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_extract_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("main.go");
    std::fs::write(&path, BACKEND).unwrap();

    let routes = RouteTable::builtin();
    let extraction = Extractor::new(&routes).extract_file(&path).unwrap();
    assert_eq!(extraction.records.len(), 7);
}

#[test]
fn test_extract_file_parse_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("main.go");
    std::fs::write(&path, "package main\n\nfunc broken() {\n").unwrap();

    let routes = RouteTable::builtin();
    let err = Extractor::new(&routes).extract_file(Path::new(&path)).unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.is_input_error());
}

#[test]
fn test_extraction_is_deterministic() {
    let routes = RouteTable::builtin();
    let extractor = Extractor::new(&routes);
    let first = debug_dump(&extractor.extract(BACKEND).unwrap());
    let second = debug_dump(&extractor.extract(BACKEND).unwrap());
    assert_eq!(first, second);
}

fn debug_dump(extraction: &tsgen_core::Extraction) -> String {
    format!("{extraction:?}")
}

#[test]
fn test_source_with_byte_order_mark() {
    let source = format!("\u{feff}{BACKEND}");
    let routes = RouteTable::builtin();
    let extraction = Extractor::new(&routes).extract(&source).unwrap();
    assert_eq!(extraction.records.len(), 7);
    assert_eq!(extraction.endpoints.len(), 4);
}

#[test]
fn test_embedded_generic_field_is_skipped() {
    let routes = RouteTable::builtin();
    let extraction = Extractor::new(&routes)
        .extract("package main\ntype A struct{\n\tL[int]\n\tX int `json:\"x\"`\n}\n")
        .unwrap();

    let record = extraction.record("A").unwrap();
    assert_eq!(record.fields.len(), 1);
    assert_eq!(record.fields[0].serialized_name, "x");
    assert!(matches!(
        extraction.diagnostics.as_slice(),
        [Diagnostic::EmbeddedFieldSkipped { record, .. }] if record == "A"
    ));
}
