use crate::render::StatBox;

/// Stacks `n` summary boxes downward from `first`.
///
/// Each box keeps the horizontal extent and height of the one before it and
/// sits directly below it with no gap.
pub fn stack_boxes(first: StatBox, n: usize) -> Vec<StatBox> {
    let mut out: Vec<StatBox> = Vec::with_capacity(n);
    for _ in 0..n {
        let next = match out.last() {
            None => first,
            Some(prev) => StatBox {
                x_min: prev.x_min,
                y_min: prev.y_min - prev.height(),
                x_max: prev.x_max,
                y_max: prev.y_min,
            },
        };
        out.push(next);
    }
    out
}
