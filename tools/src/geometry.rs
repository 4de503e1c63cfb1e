//! Geometry calculation tool
//!
//! Dispatches on a shape name and an operation name over a fixed set of
//! closed-form formulas. Unsupported combinations and missing parameters are
//! distinct [`GeometryError`] outcomes, not crashes.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::Arc;

use serde_json::json;
use thiserror::Error;
use toolcase_core::agent::{Tool, ToolError, ToolExecutorFn, ToolResult};

/// Shapes supported by the geometry tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Circle (area, perimeter)
    Circle,
    /// Square (area, perimeter)
    Square,
    /// Triangle (area, perimeter)
    Triangle,
    /// Sphere (volume, `surface_area`)
    Sphere,
    /// Cube (volume, `surface_area`)
    Cube,
}

impl Shape {
    /// Parse a lower-cased shape name
    fn parse(name: &str) -> Option<Self> {
        match name {
            "circle" => Some(Self::Circle),
            "square" => Some(Self::Square),
            "triangle" => Some(Self::Triangle),
            "sphere" => Some(Self::Sphere),
            "cube" => Some(Self::Cube),
            _ => None,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
            Self::Sphere => "sphere",
            Self::Cube => "cube",
        };
        write!(f, "{name}")
    }
}

/// Failures from a geometry calculation
///
/// The `Display` output of each variant is the exact message returned to the
/// caller, so callers may match on the variant or relay the text unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The parameter mapping was empty
    #[error("Error: No parameters provided for {shape} {operation} calculation.")]
    NoParameters {
        /// Requested shape name, lower-cased (may itself be unsupported)
        shape: String,
        /// Requested operation name, lower-cased
        operation: String,
    },

    /// The shape name is not one of the supported shapes
    #[error("Error: Unsupported shape '{shape}'.")]
    UnsupportedShape {
        /// Requested shape name, lower-cased
        shape: String,
    },

    /// The operation is not defined for the given shape
    #[error("Error: Unsupported operation '{operation}' for {shape}.")]
    UnsupportedOperation {
        /// The shape the operation was requested on
        shape: Shape,
        /// Requested operation name, lower-cased
        operation: String,
    },

    /// A radius-based shape was given no `radius` parameter
    #[error("Error: Radius is required for {shape} calculations.")]
    MissingRadius {
        /// The shape missing its radius (circle or sphere)
        shape: Shape,
    },

    /// A side-based shape was given no `side` parameter
    #[error("Error: Side length is required for {shape} calculations.")]
    MissingSide {
        /// The shape missing its side length (square or cube)
        shape: Shape,
    },

    /// Triangle area needs both `base` and `height`
    #[error("Error: Base and height are required for triangle area calculation.")]
    MissingTriangleDimensions,

    /// Triangle perimeter needs all of `a`, `b`, `c`
    #[error("Error: All three sides (a, b, c) are required for triangle perimeter calculation.")]
    MissingTriangleSides,
}

/// Compute a geometric quantity from a shape name, an operation name, and a
/// mapping of named parameters
///
/// Shape and operation matching is case-insensitive. An empty parameter
/// mapping fails before anything else, regardless of whether the requested
/// operation would need parameters.
///
/// # Errors
///
/// Returns [`GeometryError`] for an empty parameter mapping, an unsupported
/// shape or operation, or a missing required parameter.
pub fn solve(
    shape: &str,
    operation: &str,
    parameters: &HashMap<String, f64>,
) -> Result<f64, GeometryError> {
    let shape_name = shape.to_lowercase();
    let operation = operation.to_lowercase();

    if parameters.is_empty() {
        return Err(GeometryError::NoParameters {
            shape: shape_name,
            operation,
        });
    }

    let Some(shape) = Shape::parse(&shape_name) else {
        return Err(GeometryError::UnsupportedShape { shape: shape_name });
    };

    match shape {
        Shape::Circle => circle(&operation, parameters),
        Shape::Square => square(&operation, parameters),
        Shape::Triangle => triangle(&operation, parameters),
        Shape::Sphere => sphere(&operation, parameters),
        Shape::Cube => cube(&operation, parameters),
    }
}

fn circle(operation: &str, params: &HashMap<String, f64>) -> Result<f64, GeometryError> {
    let radius = params
        .get("radius")
        .copied()
        .ok_or(GeometryError::MissingRadius {
            shape: Shape::Circle,
        })?;
    match operation {
        "area" => Ok(PI * radius.powi(2)),
        "perimeter" => Ok(2.0 * PI * radius),
        _ => Err(GeometryError::UnsupportedOperation {
            shape: Shape::Circle,
            operation: operation.to_string(),
        }),
    }
}

fn square(operation: &str, params: &HashMap<String, f64>) -> Result<f64, GeometryError> {
    let side = params
        .get("side")
        .copied()
        .ok_or(GeometryError::MissingSide {
            shape: Shape::Square,
        })?;
    match operation {
        "area" => Ok(side.powi(2)),
        "perimeter" => Ok(4.0 * side),
        _ => Err(GeometryError::UnsupportedOperation {
            shape: Shape::Square,
            operation: operation.to_string(),
        }),
    }
}

fn triangle(operation: &str, params: &HashMap<String, f64>) -> Result<f64, GeometryError> {
    match operation {
        "area" => match (params.get("base"), params.get("height")) {
            (Some(base), Some(height)) => Ok(0.5 * base * height),
            _ => Err(GeometryError::MissingTriangleDimensions),
        },
        "perimeter" => match (params.get("a"), params.get("b"), params.get("c")) {
            (Some(a), Some(b), Some(c)) => Ok(a + b + c),
            _ => Err(GeometryError::MissingTriangleSides),
        },
        _ => Err(GeometryError::UnsupportedOperation {
            shape: Shape::Triangle,
            operation: operation.to_string(),
        }),
    }
}

fn sphere(operation: &str, params: &HashMap<String, f64>) -> Result<f64, GeometryError> {
    let radius = params
        .get("radius")
        .copied()
        .ok_or(GeometryError::MissingRadius {
            shape: Shape::Sphere,
        })?;
    match operation {
        "volume" => Ok((4.0 / 3.0) * PI * radius.powi(3)),
        "surface_area" => Ok(4.0 * PI * radius.powi(2)),
        _ => Err(GeometryError::UnsupportedOperation {
            shape: Shape::Sphere,
            operation: operation.to_string(),
        }),
    }
}

fn cube(operation: &str, params: &HashMap<String, f64>) -> Result<f64, GeometryError> {
    let side = params
        .get("side")
        .copied()
        .ok_or(GeometryError::MissingSide { shape: Shape::Cube })?;
    match operation {
        "volume" => Ok(side.powi(3)),
        "surface_area" => Ok(6.0 * side.powi(2)),
        _ => Err(GeometryError::UnsupportedOperation {
            shape: Shape::Cube,
            operation: operation.to_string(),
        }),
    }
}

/// Parse the `parameters` field into a name→number mapping
fn parse_parameters(value: &serde_json::Value) -> Result<HashMap<String, f64>, ToolError> {
    match value {
        serde_json::Value::Null => Ok(HashMap::new()),
        serde_json::Value::Object(map) => map
            .iter()
            .map(|(key, v)| {
                v.as_f64()
                    .map(|n| (key.clone(), n))
                    .ok_or_else(|| ToolError {
                        message: format!("Parameter '{key}' must be a number"),
                    })
            })
            .collect(),
        _ => Err(ToolError {
            message: "'parameters' must be an object of numbers".to_string(),
        }),
    }
}

/// Create the `geometry_expert` tool
///
/// Computes area, perimeter, volume, or surface area for a fixed set of
/// shapes (circle, square, triangle, sphere, cube).
///
/// Returns the result as a sentence:
/// `The area of the circle is approximately 78.5398`
#[must_use]
pub fn geometry_tool() -> (Tool, ToolExecutorFn) {
    let tool = Tool {
        name: "geometry_expert".to_string(),
        description: "An expert tool for performing geometric calculations.".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "shape": {
                    "type": "string",
                    "description": "The geometric shape to calculate (e.g. circle, square, triangle, sphere, cube)"
                },
                "operation": {
                    "type": "string",
                    "description": "The operation to perform (e.g. area, perimeter, volume, surface_area)"
                },
                "parameters": {
                    "type": "object",
                    "description": "Shape parameters (e.g. {\"radius\": 5} for a circle)",
                    "additionalProperties": {"type": "number"},
                    "default": {}
                }
            },
            "required": ["shape", "operation"]
        }),
    };

    let executor = Arc::new(|input: String| {
        Box::pin(async move {
            let parsed: serde_json::Value = serde_json::from_str(&input).map_err(|e| {
                ToolError {
                    message: format!("Invalid input JSON: {e}"),
                }
            })?;

            let shape = parsed["shape"]
                .as_str()
                .ok_or_else(|| ToolError {
                    message: "Missing 'shape' field".to_string(),
                })?;

            let operation = parsed["operation"]
                .as_str()
                .ok_or_else(|| ToolError {
                    message: "Missing 'operation' field".to_string(),
                })?;

            let parameters = parse_parameters(&parsed["parameters"])?;

            let value = solve(shape, operation, &parameters).map_err(|e| ToolError {
                message: e.to_string(),
            })?;

            Ok(format!(
                "The {} of the {} is approximately {value:.4}",
                operation.to_lowercase(),
                shape.to_lowercase(),
            ))
        }) as std::pin::Pin<
            Box<dyn std::future::Future<Output = ToolResult> + Send>,
        >
    }) as ToolExecutorFn;

    (tool, executor)
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code can use expect
mod tests {
    use super::*;

    fn params(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), *v))
            .collect()
    }

    #[test]
    fn test_geometry_tool_schema() {
        let (tool, _executor) = geometry_tool();
        assert_eq!(tool.name, "geometry_expert");
        assert!(tool.input_schema.is_object());
    }

    #[test]
    fn test_solve_all_supported_pairs() {
        let radius = params(&[("radius", 5.0)]);
        let side = params(&[("side", 3.0)]);

        let area = solve("circle", "area", &radius).expect("circle area");
        assert!((area - 78.539_816_339_744_83).abs() < 1e-9);

        let perimeter = solve("circle", "perimeter", &radius).expect("circle perimeter");
        assert!((perimeter - 31.415_926_535_897_93).abs() < 1e-9);

        assert_eq!(solve("square", "area", &side).expect("square area"), 9.0);
        assert_eq!(
            solve("square", "perimeter", &side).expect("square perimeter"),
            12.0
        );

        let triangle_area = solve(
            "triangle",
            "area",
            &params(&[("base", 6.0), ("height", 4.0)]),
        )
        .expect("triangle area");
        assert_eq!(triangle_area, 12.0);

        let triangle_perimeter = solve(
            "triangle",
            "perimeter",
            &params(&[("a", 3.0), ("b", 4.0), ("c", 5.0)]),
        )
        .expect("triangle perimeter");
        assert_eq!(triangle_perimeter, 12.0);

        let volume = solve("sphere", "volume", &params(&[("radius", 3.0)]))
            .expect("sphere volume");
        assert!((volume - 113.097_335_529_232_56).abs() < 1e-9);

        let surface = solve("sphere", "surface_area", &params(&[("radius", 3.0)]))
            .expect("sphere surface area");
        assert!((surface - 113.097_335_529_232_56).abs() < 1e-9);

        assert_eq!(solve("cube", "volume", &side).expect("cube volume"), 27.0);
        assert_eq!(
            solve("cube", "surface_area", &side).expect("cube surface area"),
            54.0
        );
    }

    #[test]
    fn test_solve_case_insensitive() {
        let result = solve("CIRCLE", "AREA", &params(&[("radius", 1.0)]));
        assert_eq!(result.expect("should succeed"), PI);
    }

    #[test]
    fn test_solve_empty_parameters() {
        let result = solve("cube", "volume", &HashMap::new());
        assert_eq!(
            result.expect_err("should fail").to_string(),
            "Error: No parameters provided for cube volume calculation."
        );
    }

    #[test]
    fn test_solve_empty_parameters_checked_before_shape() {
        // The empty check runs first, even for an unsupported shape
        let result = solve("hexagon", "area", &HashMap::new());
        assert_eq!(
            result.expect_err("should fail"),
            GeometryError::NoParameters {
                shape: "hexagon".to_string(),
                operation: "area".to_string(),
            }
        );
    }

    #[test]
    fn test_solve_unsupported_shape() {
        let result = solve("hexagon", "area", &params(&[("side", 2.0)]));
        assert_eq!(
            result.expect_err("should fail").to_string(),
            "Error: Unsupported shape 'hexagon'."
        );
    }

    #[test]
    fn test_solve_unsupported_operation() {
        let result = solve("circle", "circumference", &params(&[("radius", 5.0)]));
        assert_eq!(
            result.expect_err("should fail").to_string(),
            "Error: Unsupported operation 'circumference' for circle."
        );
    }

    #[test]
    fn test_solve_missing_parameter_messages() {
        let filler = params(&[("unrelated", 1.0)]);

        assert_eq!(
            solve("circle", "area", &filler)
                .expect_err("should fail")
                .to_string(),
            "Error: Radius is required for circle calculations."
        );
        assert_eq!(
            solve("sphere", "volume", &filler)
                .expect_err("should fail")
                .to_string(),
            "Error: Radius is required for sphere calculations."
        );
        assert_eq!(
            solve("square", "area", &filler)
                .expect_err("should fail")
                .to_string(),
            "Error: Side length is required for square calculations."
        );
        assert_eq!(
            solve("cube", "volume", &filler)
                .expect_err("should fail")
                .to_string(),
            "Error: Side length is required for cube calculations."
        );
        assert_eq!(
            solve("triangle", "area", &params(&[("base", 6.0)]))
                .expect_err("should fail")
                .to_string(),
            "Error: Base and height are required for triangle area calculation."
        );
        assert_eq!(
            solve("triangle", "perimeter", &params(&[("a", 3.0), ("b", 4.0)]))
                .expect_err("should fail")
                .to_string(),
            "Error: All three sides (a, b, c) are required for triangle perimeter calculation."
        );
    }

    #[tokio::test]
    async fn test_executor_formats_to_four_decimals() {
        let (_tool, executor) = geometry_tool();

        let input = json!({
            "shape": "circle",
            "operation": "area",
            "parameters": {"radius": 5}
        })
        .to_string();

        let result = executor(input).await;
        assert_eq!(
            result.expect("should succeed"),
            "The area of the circle is approximately 78.5398"
        );
    }

    #[tokio::test]
    async fn test_executor_lower_cases_output() {
        let (_tool, executor) = geometry_tool();

        let input = json!({
            "shape": "CIRCLE",
            "operation": "AREA",
            "parameters": {"radius": 1}
        })
        .to_string();

        let result = executor(input).await;
        assert_eq!(
            result.expect("should succeed"),
            "The area of the circle is approximately 3.1416"
        );
    }

    #[tokio::test]
    async fn test_executor_empty_parameters() {
        let (_tool, executor) = geometry_tool();

        let input = json!({
            "shape": "cube",
            "operation": "volume",
            "parameters": {}
        })
        .to_string();

        let result = executor(input).await;
        assert_eq!(
            result.expect_err("should fail").message,
            "Error: No parameters provided for cube volume calculation."
        );
    }

    #[tokio::test]
    async fn test_executor_defaults_missing_parameters_to_empty() {
        let (_tool, executor) = geometry_tool();

        let input = json!({
            "shape": "cube",
            "operation": "volume"
        })
        .to_string();

        let result = executor(input).await;
        assert_eq!(
            result.expect_err("should fail").message,
            "Error: No parameters provided for cube volume calculation."
        );
    }

    #[tokio::test]
    async fn test_executor_rejects_non_numeric_parameter() {
        let (_tool, executor) = geometry_tool();

        let input = json!({
            "shape": "circle",
            "operation": "area",
            "parameters": {"radius": "five"}
        })
        .to_string();

        let result = executor(input).await;
        assert!(result
            .expect_err("should fail")
            .message
            .contains("must be a number"));
    }

    #[tokio::test]
    async fn test_executor_missing_shape_field() {
        let (_tool, executor) = geometry_tool();

        let input = json!({
            "operation": "area",
            "parameters": {"radius": 5}
        })
        .to_string();

        let result = executor(input).await;
        assert_eq!(
            result.expect_err("should fail").message,
            "Missing 'shape' field"
        );
    }
}
