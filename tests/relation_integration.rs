//! Integration tests for relation inference.
//!
//! These tests verify cardinality classification and deep keys across
//! realistic multi-model schemas.

use nestgen::schema::{Cardinality, Ir, RelationEntry, compile_schema};
use pretty_assertions::assert_eq;

fn entry<'a>(ir: &'a Ir, model: &str, key: &str) -> (Cardinality, &'a RelationEntry) {
    ir.relations(model)
        .and_then(|r| r.find(key))
        .unwrap_or_else(|| panic!("no relation {model}.{key}"))
}

fn deep_key(ir: &Ir, model: &str, key: &str) -> Option<Vec<String>> {
    entry(ir, model, key)
        .1
        .deep_key
        .as_ref()
        .map(|dk| dk.iter().map(|s| s.to_string()).collect())
}

const HELPDESK: &str = r#"
model User {
  id              Int       @id @default(autoincrement())
  email           String    @unique
  profile         Profile?
  reportedTickets Ticket[]  @relation("Reporter")
  assignedTickets Ticket[]  @relation("Assignee")
  comments        Comment[]
  teams           Team[]
}

model Profile {
  id     Int  @id
  userId Int  @unique
  user   User @relation(fields: [userId], references: [id])
}

model Ticket {
  id         Int       @id
  title      String
  reporterId Int
  reporter   User      @relation("Reporter", fields: [reporterId], references: [id])
  assigneeId Int?
  assignee   User?     @relation("Assignee", fields: [assigneeId], references: [id])
  comments   Comment[]
}

model Comment {
  id       Int    @id
  body     String
  ticketId Int
  ticket   Ticket @relation(fields: [ticketId], references: [id])
  authorId Int
  author   User   @relation(fields: [authorId], references: [id])
}

model Team {
  id      Int    @id
  members User[]
}

model AuditLog {
  id      Int    @id
  actorId Int
  actor   User   @relation(fields: [actorId], references: [id])
}
"#;

/// Test the four cardinalities on one schema
#[test]
fn test_helpdesk_cardinalities() {
    let ir = compile_schema(HELPDESK);

    assert_eq!(entry(&ir, "User", "profile").0, Cardinality::OneToOne);
    assert_eq!(entry(&ir, "Profile", "user").0, Cardinality::OneToOne);
    assert_eq!(entry(&ir, "User", "reportedTickets").0, Cardinality::OneToMany);
    assert_eq!(entry(&ir, "User", "assignedTickets").0, Cardinality::OneToMany);
    assert_eq!(entry(&ir, "Ticket", "reporter").0, Cardinality::ManyToOne);
    assert_eq!(entry(&ir, "Ticket", "assignee").0, Cardinality::ManyToOne);
    assert_eq!(entry(&ir, "Ticket", "comments").0, Cardinality::OneToMany);
    assert_eq!(entry(&ir, "Comment", "ticket").0, Cardinality::ManyToOne);
    assert_eq!(entry(&ir, "User", "teams").0, Cardinality::ManyToMany);
    assert_eq!(entry(&ir, "Team", "members").0, Cardinality::ManyToMany);
    assert_eq!(entry(&ir, "AuditLog", "actor").0, Cardinality::ManyToOne);
}

/// Test that every relation property lands in exactly one bucket
#[test]
fn test_bucket_exhaustiveness() {
    let ir = compile_schema(HELPDESK);

    for model in ir.models() {
        let record = ir.relations(model.name()).unwrap();
        let relation_keys: Vec<_> = model.relation_properties().map(|p| p.key()).collect();

        let mut bucketed: Vec<_> = record.iter().map(|(_, e)| e.key.as_str()).collect();
        bucketed.sort_unstable();
        let mut expected = relation_keys.clone();
        expected.sort_unstable();

        assert_eq!(bucketed, expected, "model {}", model.name());
    }
}

/// Test deep keys for a pair of labelled relations
#[test]
fn test_deep_keys_by_label() {
    let ir = compile_schema(HELPDESK);

    assert_eq!(
        deep_key(&ir, "User", "reportedTickets"),
        Some(vec!["assignee".to_string()])
    );
    assert_eq!(
        deep_key(&ir, "User", "assignedTickets"),
        Some(vec!["reporter".to_string()])
    );
}

/// Test deep keys when the relation name is passed as a trailing `name:` argument
#[test]
fn test_deep_keys_by_trailing_name_argument() {
    let ir = compile_schema(
        r#"
model User {
  id       Int      @id
  assigned Ticket[] @relation("Assigned")
  reported Ticket[] @relation("Reported")
}

model Ticket {
  id         Int  @id
  reporterId Int
  reporter   User @relation(fields: [reporterId], references: [id], name: "Reported")
  assigneeId Int
  assignee   User @relation(fields: [assigneeId], references: [id], name: "Assigned")
}
"#,
    );

    assert_eq!(deep_key(&ir, "User", "assigned"), Some(vec!["reporter".to_string()]));
    assert_eq!(deep_key(&ir, "User", "reported"), Some(vec!["assignee".to_string()]));
}

/// Test that a single reverse reference needs no deep key
#[test]
fn test_no_deep_key_for_single_reference() {
    let ir = compile_schema(HELPDESK);

    assert_eq!(deep_key(&ir, "User", "comments"), None);
    assert_eq!(deep_key(&ir, "Ticket", "comments"), None);
}

/// Test the unlabelled deep-key pairing
#[test]
fn test_deep_keys_by_declaration_order() {
    let ir = compile_schema(
        r#"
model Account {
  id       Int        @id
  sent     Transfer[]
  received Transfer[]
}

model Transfer {
  id   Int     @id
  from Account
  to   Account
}
"#,
    );

    assert_eq!(deep_key(&ir, "Account", "sent"), Some(vec!["to".to_string()]));
    assert_eq!(deep_key(&ir, "Account", "received"), Some(vec!["from".to_string()]));
}

/// Test unidirectional relations keep their default cardinalities
#[test]
fn test_unidirectional_defaults() {
    let ir = compile_schema(
        r#"
model User {
  id Int
}

model Post {
  id       Int
  authorId Int
  author   User
  tags     Tag[]
}

model Tag {
  id Int
}
"#,
    );

    assert_eq!(entry(&ir, "Post", "author").0, Cardinality::ManyToOne);
    assert_eq!(entry(&ir, "Post", "tags").0, Cardinality::ManyToMany);
    assert!(ir.relations("User").unwrap().is_empty());
    assert!(ir.relations("Tag").unwrap().is_empty());
}

/// Test self-referencing models
#[test]
fn test_self_relations() {
    let ir = compile_schema(
        r#"
model Category {
  id       Int        @id
  parentId Int?
  parent   Category?  @relation("Tree", fields: [parentId], references: [id])
  children Category[] @relation("Tree")
}

model Person {
  id        Int      @id
  following Person[]
  followers Person[]
}
"#,
    );

    assert_eq!(entry(&ir, "Category", "parent").0, Cardinality::ManyToOne);
    assert_eq!(entry(&ir, "Category", "children").0, Cardinality::OneToMany);
    assert_eq!(deep_key(&ir, "Category", "children"), None);

    assert_eq!(entry(&ir, "Person", "following").0, Cardinality::ManyToMany);
    assert_eq!(entry(&ir, "Person", "followers").0, Cardinality::ManyToMany);
}

/// Test the accessor helper on relation entries
#[test]
fn test_relation_accessor() {
    let ir = compile_schema(HELPDESK);
    assert_eq!(entry(&ir, "User", "reportedTickets").1.accessor(), "ticket");
    assert_eq!(entry(&ir, "AuditLog", "actor").1.value, "User");
}

/// Test that deep keys are omitted from JSON when absent
#[test]
fn test_relation_record_json() {
    let ir = compile_schema(HELPDESK);
    let json = serde_json::to_value(ir.relations("Ticket").unwrap()).unwrap();

    let many_to_one = json["many_to_one"].as_array().unwrap();
    assert_eq!(many_to_one.len(), 2);
    assert!(many_to_one[0].get("deep_key").is_none());

    let user = serde_json::to_value(ir.relations("User").unwrap()).unwrap();
    assert_eq!(
        user["one_to_many"][0]["deep_key"],
        serde_json::json!(["assignee"])
    );
}
