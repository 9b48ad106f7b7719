use super::*;

#[test]
fn parses_scheme_path_and_components() {
    let p = ChannelPath::parse("panima:/skeleton/bone0/position?components=x,z");
    assert_eq!(p.path, "/skeleton/bone0/position");
    assert_eq!(p.components, Some(vec!["x".to_string(), "z".to_string()]));
}

#[test]
fn parses_without_scheme_prefix() {
    let p = ChannelPath::parse("/skeleton/bone0/position");
    assert_eq!(p.path, "/skeleton/bone0/position");
    assert_eq!(p.components, None);
}

#[test]
fn unknown_scheme_yields_empty_path() {
    let p = ChannelPath::parse("http://example.com/foo");
    assert_eq!(p, ChannelPath::empty());
}

#[test]
fn percent_decodes_space_in_path() {
    let p = ChannelPath::parse("panima:/bone%20name/position");
    assert_eq!(p.path, "/bone name/position");
}

#[test]
fn ignores_unknown_query_params() {
    let p = ChannelPath::parse("panima:/x?foo=bar&components=x");
    assert_eq!(p.components, Some(vec!["x".to_string()]));
}

#[test]
fn to_uri_round_trips_scenario_s6() {
    let uri = "panima:/skeleton/bone0/position?components=x,z";
    let p = ChannelPath::parse(uri);
    assert_eq!(p.to_uri(true), uri);
}

#[test]
fn equality_requires_same_component_order() {
    let a = ChannelPath::parse("panima:/p?components=x,y");
    let b = ChannelPath::parse("panima:/p?components=y,x");
    assert_ne!(a, b);
    let c = ChannelPath::parse("panima:/p?components=x,y");
    assert_eq!(a, c);
}

#[test]
fn missing_components_differs_from_empty_components() {
    let without = ChannelPath::parse("panima:/p");
    let empty = ChannelPath {
        path: "/p".to_string(),
        components: Some(vec![]),
    };
    assert_ne!(without, empty);
}
