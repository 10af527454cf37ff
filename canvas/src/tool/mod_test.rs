use super::*;

#[test]
fn tool_id_names() {
    assert_eq!(ToolId::Select.as_str(), "select");
    assert_eq!(ToolId::Line.as_str(), "line");
    assert_eq!(ToolId::Line.to_string(), "line");
}

#[test]
fn tool_id_parses_exact_names() {
    assert_eq!("select".parse::<ToolId>(), Ok(ToolId::Select));
    assert_eq!("line".parse::<ToolId>(), Ok(ToolId::Line));
}

#[test]
fn tool_id_rejects_unknown_names() {
    assert_eq!("Line".parse::<ToolId>(), Err(ToolIdError("Line".into())));
    assert_eq!("bogus".parse::<ToolId>().map_err(|e| e.to_string()), Err("unknown tool: bogus".into()));
}

#[test]
fn tool_id_create_matches_name() {
    for id in ToolId::ALL {
        assert_eq!(id.create().name(), id.as_str());
    }
}

#[test]
fn tool_id_round_trips_through_display() {
    for id in ToolId::ALL {
        assert_eq!(id.to_string().parse::<ToolId>(), Ok(id));
    }
}
