//! Line protocol writer.
//!
//! Renders a [`RoutingInput`] in the format [`read_input`](super::read_input)
//! accepts, for clients that drive the solver as a subprocess.

use crate::models::RoutingInput;

/// Makes a pickup name safe for the `|`-delimited protocol.
///
/// # Examples
///
/// ```
/// use pickup_router::protocol::sanitize_name;
///
/// assert_eq!(sanitize_name("  Bay 3|North\nside "), "Bay 3/North side");
/// ```
pub fn sanitize_name(name: &str) -> String {
    name.replace('|', "/")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}

/// Renders `input` as protocol lines, one pickup per line in input order.
///
/// # Examples
///
/// ```
/// use pickup_router::models::{Pickup, Point, RoutingInput};
/// use pickup_router::protocol::{encode_input, parse_input};
///
/// let input = RoutingInput::new(Point::new(1.5, -2.0), 4)
///     .with_pickup(Pickup::new("A", Point::new(1.6, -2.0), 2));
/// let text = encode_input(&input);
/// assert_eq!(parse_input(&text).unwrap(), input);
/// ```
pub fn encode_input(input: &RoutingInput) -> String {
    let mut out = format!(
        "depot: {},{}\ncapacity: {}\noptimize: {}\n",
        input.depot().lat,
        input.depot().lng,
        input.capacity(),
        u8::from(input.optimize())
    );
    for pickup in input.pickups() {
        out.push_str(&format!(
            "pickup: {}|{}|{}|{}\n",
            sanitize_name(pickup.name()),
            pickup.location().lat,
            pickup.location().lng,
            pickup.demand()
        ));
    }
    out
}
