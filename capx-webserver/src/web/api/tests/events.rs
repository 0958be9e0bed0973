use super::prelude::*;

#[test]
fn events_require_authentication() {
    let (client, _) = setup();
    let res = client.get("/events").dispatch();
    assert_eq!(Status::Unauthorized, res.status());
    test_json(&res);
    let res = client
        .post("/events")
        .header(ContentType::JSON)
        .body(new_event("Wikimania").to_string())
        .dispatch();
    assert_eq!(Status::Unauthorized, res.status());
}

#[test]
fn create_event_enrolls_the_creator() {
    let (client, _) = setup();
    let (alice, auth) = register_and_login(&client, "alice");
    let (status, event) = post_json(&client, &auth, "/events", new_event("Wikimania"));
    assert_eq!(Status::Created, status);
    assert_eq!("Wikimania", event["name"]);
    assert_eq!("virtual", event["type_of_location"]);
    assert_eq!(alice, event["creator"]);

    let uri = format!("/events_participants?event={}", event["id"].as_str().unwrap());
    let (status, participants) = get_json(&client, &auth, &uri);
    assert_eq!(Status::Ok, status);
    let participants = participants.as_array().unwrap();
    assert_eq!(1, participants.len());
    assert_eq!(alice, participants[0]["participant"]);
    assert_eq!("organizer", participants[0]["role"]);
    assert_eq!(true, participants[0]["confirmed_organizer"]);
    assert_eq!(true, participants[0]["confirmed_participant"]);
    assert_eq!(true, participants[0]["confirmed"]);
}

#[test]
fn create_event_with_invalid_dates() {
    let (client, _) = setup();
    let (_, auth) = register_and_login(&client, "alice");
    let mut event = new_event("Wikimania");
    event["time_end"] = json!(1_600_000_000);
    let (status, err) = post_json(&client, &auth, "/events", event);
    assert_eq!(Status::BadRequest, status);
    assert_eq!(400, err["http_status"]);
}

#[test]
fn create_event_with_unknown_location_type() {
    let (client, _) = setup();
    let (_, auth) = register_and_login(&client, "alice");
    let mut event = new_event("Wikimania");
    event["type_of_location"] = json!("underwater");
    let (status, _) = post_json(&client, &auth, "/events", event);
    assert_eq!(Status::BadRequest, status);
}

#[test]
fn only_the_team_can_edit_an_event() {
    let (client, _) = setup();
    let (_, alice) = register_and_login(&client, "alice");
    let (bob_id, bob) = register_and_login(&client, "bob");
    let event = create_event(&client, &alice, "Wikimania");
    let uri = format!("/events/{event}");

    let (status, participation) = post_json(
        &client,
        &alice,
        "/events_participants",
        json!({ "event": event, "participant": bob_id, "role": "volunteer" }),
    );
    assert_eq!(Status::Created, status);
    assert_eq!(false, participation["confirmed_participant"]);

    let (status, err) = put_json(&client, &bob, &uri, new_event("Hijacked"));
    assert_eq!(Status::Forbidden, status);
    assert_eq!("Only the organizer or staff can edit this event", err["message"]);

    let participation_uri = format!(
        "/events_participants/{}",
        participation["id"].as_str().unwrap()
    );
    let (status, _) = put_json(
        &client,
        &alice,
        &participation_uri,
        json!({ "role": "organizer" }),
    );
    assert_eq!(Status::Ok, status);

    let (status, event) = put_json(&client, &bob, &uri, new_event("Wikimania 2025"));
    assert_eq!(Status::Ok, status);
    assert_eq!("Wikimania 2025", event["name"]);
}

#[test]
fn patch_event_changes_only_given_fields() {
    let (client, _) = setup();
    let (_, auth) = register_and_login(&client, "alice");
    let mut new = new_event("Wikimania");
    new["url"] = json!("https://wikimania.wikimedia.org/");
    let (_, event) = post_json(&client, &auth, "/events", new);
    let uri = format!("/events/{}", event["id"].as_str().unwrap());

    let res = client
        .patch(uri.as_str())
        .header(ContentType::JSON)
        .header(auth.clone())
        .body(r#"{"type_of_location": "hybrid"}"#)
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let event = body_json(res);
    assert_eq!("hybrid", event["type_of_location"]);
    assert_eq!("Wikimania", event["name"]);
    assert_eq!("https://wikimania.wikimedia.org/", event["url"]);
}

#[test]
fn only_staff_can_delete_an_event() {
    let (client, db) = setup();
    let (_, alice) = register_and_login(&client, "alice");
    let (_, staff) = register_staff(&client, &db, "admin");
    let event = create_event(&client, &alice, "Wikimania");
    let uri = format!("/events/{event}");

    let res = client.delete(uri.as_str()).header(alice.clone()).dispatch();
    assert_eq!(Status::Forbidden, res.status());
    assert_eq!("Only staff can delete an event", body_json(res)["message"]);

    assert_eq!(Status::NoContent, delete(&client, &staff, &uri));
    let (status, _) = get_json(&client, &alice, &uri);
    assert_eq!(Status::NotFound, status);
}

#[test]
fn get_unknown_event() {
    let (client, _) = setup();
    let (_, auth) = register_and_login(&client, "alice");
    let (status, err) = get_json(&client, &auth, "/events/does-not-exist");
    assert_eq!(Status::NotFound, status);
    assert_eq!(404, err["http_status"]);
}
