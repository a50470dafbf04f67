use luis_api::types::LuisResult;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_full_result() {
    let json = load_fixture("book_flight.json");
    let result: LuisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result.query.as_deref(), Some("book a flight to Paris tomorrow"));
    assert_eq!(result.intents.len(), 3);
    assert_eq!(result.entities.len(), 3);

    let book = &result.intents[0];
    assert_eq!(book.intent, "BookFlight");
    assert_eq!(book.score, Some(0.9871));
    assert_eq!(book.actions.len(), 1);

    let action = &book.actions[0];
    assert!(action.triggered);
    assert_eq!(action.name.as_deref(), Some("BookFlight"));
    assert_eq!(action.parameters.len(), 2);
    assert_eq!(action.parameters[0].value[0].entity, "paris");
    assert!(!action.parameters[1].required);
    assert!(action.parameters[1].value.is_empty());

    let paris = &result.entities[0];
    assert_eq!(paris.entity_type, "Location::ToLocation");
    assert_eq!(paris.start_index, Some(17));
    assert_eq!(paris.end_index, Some(21));

    let date = &result.entities[1];
    assert_eq!(date.score, None);
    let resolution = date.resolution.as_ref().unwrap();
    assert_eq!(resolution["date"], "2016-04-13");
}

#[test]
fn deserialize_null_lists_as_empty() {
    let json = load_fixture("no_entities.json");
    let result: LuisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result.intents.len(), 1);
    assert!(result.intents[0].actions.is_empty());
    assert!(result.entities.is_empty());
}

#[test]
fn deserialize_missing_lists_as_empty() {
    let result: LuisResult = serde_json::from_str("{}").unwrap();
    assert!(result.query.is_none());
    assert!(result.intents.is_empty());
    assert!(result.entities.is_empty());
}

#[test]
fn reserialize_keeps_wire_field_names() {
    let json = load_fixture("book_flight.json");
    let result: LuisResult = serde_json::from_str(&json).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["entities"][0]["type"], "Location::ToLocation");
    assert_eq!(value["entities"][0]["startIndex"], 17);
    assert!(value["entities"][1].get("score").is_none());

    let again: LuisResult = serde_json::from_value(value).unwrap();
    assert_eq!(again, result);
}

#[test]
fn find_entity_in_fixture() {
    let json = load_fixture("book_flight.json");
    let result: LuisResult = serde_json::from_str(&json).unwrap();

    let date = result.try_find_entity("builtin.datetime.date").unwrap();
    assert_eq!(date.entity, "tomorrow");

    let location = result.try_find_entity("Location").unwrap();
    assert_eq!(location.score, Some(0.6120));

    assert!(result.try_find_entity("Airline").is_none());
    assert_eq!(result.top_intent().unwrap().intent, "BookFlight");
}
