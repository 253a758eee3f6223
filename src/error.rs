/// Errors produced by the geometry engine.
///
/// The sequencer never surfaces these to the host. A degenerate arrow simply
/// means the step is drawn without one.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum GeometryError {
    #[error("arrow at ({x}, {y}) has no length")]
    DegenerateArrow { x: f32, y: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_arrow_message_names_the_point() {
        let message = GeometryError::DegenerateArrow { x: 1.5, y: -2.0 }.to_string();
        assert!(message.contains("(1.5, -2)"));
        assert!(message.contains("no length"));
    }
}
