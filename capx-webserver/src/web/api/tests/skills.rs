use super::prelude::*;

fn create_skill(client: &Client, auth: &Header<'static>, body: Value) -> String {
    let (status, skill) = post_json(client, auth, "/skills", body);
    assert_eq!(Status::Created, status);
    skill["id"].as_str().unwrap().to_string()
}

#[test]
fn only_staff_can_create_skills() {
    let (client, db) = setup();
    let (_, alice) = register_and_login(&client, "alice");
    let (_, staff) = register_staff(&client, &db, "admin");
    let (status, _) = post_json(&client, &alice, "/skills", json!({ "name": "Translation" }));
    assert_eq!(Status::Forbidden, status);

    let (status, skill) = post_json(
        &client,
        &staff,
        "/skills",
        json!({ "name": "Translation", "wikidata_item": "Q7553" }),
    );
    assert_eq!(Status::Created, status);
    assert_eq!("Q7553", skill["wikidata_item"]);

    let (status, skills) = get_json(&client, &alice, "/skills");
    assert_eq!(Status::Ok, status);
    assert_eq!(1, skills.as_array().unwrap().len());
}

#[test]
fn invalid_wikidata_item() {
    let (client, db) = setup();
    let (_, staff) = register_staff(&client, &db, "admin");
    let (status, _) = post_json(
        &client,
        &staff,
        "/skills",
        json!({ "name": "Translation", "wikidata_item": "7553" }),
    );
    assert_eq!(Status::BadRequest, status);
}

#[test]
fn referenced_skills_cannot_be_deleted() {
    let (client, db) = setup();
    let (_, staff) = register_staff(&client, &db, "admin");
    let communication = create_skill(&client, &staff, json!({ "name": "Communication" }));
    let translation = create_skill(
        &client,
        &staff,
        json!({ "name": "Translation", "supertypes": [communication] }),
    );

    let uri = format!("/skills/{communication}");
    let res = client.delete(uri.as_str()).header(staff.clone()).dispatch();
    assert_eq!(Status::Forbidden, res.status());
    assert_eq!(
        "This skill is referenced by other items and cannot be deleted.",
        body_json(res)["message"]
    );

    assert_eq!(
        Status::NoContent,
        delete(&client, &staff, &format!("/skills/{translation}"))
    );
    assert_eq!(Status::NoContent, delete(&client, &staff, &uri));
}

#[test]
fn supertypes_must_not_form_a_cycle() {
    let (client, db) = setup();
    let (_, staff) = register_staff(&client, &db, "admin");
    let a = create_skill(&client, &staff, json!({ "name": "A" }));
    let b = create_skill(&client, &staff, json!({ "name": "B", "supertypes": [a] }));
    let (status, _) = put_json(
        &client,
        &staff,
        &format!("/skills/{a}"),
        json!({ "supertypes": [b] }),
    );
    assert_eq!(Status::BadRequest, status);
    let (status, skill) = put_json(
        &client,
        &staff,
        &format!("/skills/{a}"),
        json!({ "description": "The first letter" }),
    );
    assert_eq!(Status::Ok, status);
    assert_eq!("The first letter", skill["description"]);
}
