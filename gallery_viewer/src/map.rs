//! ASCII minimap: wall borders, artwork edge markers, and the oriented user
//! arrow, one text block per render.

use gallery_engine::{Edge, Facing, GalleryLayout, Position, User};

/// Render the full grid. Horizontal rules show the edge between two rows
/// (`===` artwork, `---` wall); the cell rows interleave vertical edges
/// (`:` artwork, `|` wall) with cell contents.
pub fn render_map(layout: &GalleryLayout, user: &User) -> Vec<String> {
    let grid = layout.grid_size();
    let mut lines = Vec::with_capacity(grid as usize * 2 + 2);

    for y in 1..=grid {
        lines.push(horizontal_rule(layout, y, grid));
        lines.push(cell_row(layout, user, y, grid));
    }
    lines.push(closing_rule(layout, grid));
    lines.push("^v<> you  * artwork cell  === artwork edge  --- wall".to_string());
    lines
}

/// The rule above row `y`, considering row `y - 1`'s bottom edges too.
fn horizontal_rule(layout: &GalleryLayout, y: i32, grid: i32) -> String {
    let mut line = String::new();
    for x in 1..=grid {
        let above = Position::new(x, y - 1);
        let below = Position::new(x, y);
        let artwork = layout.artwork_on_edge(below, Edge::Top)
            || layout.artwork_on_edge(above, Edge::Bottom);
        let wall = layout.wall_on_edge(below, Edge::Top) || layout.wall_on_edge(above, Edge::Bottom);
        line.push('+');
        line.push_str(edge_fill(artwork, wall));
    }
    line.push('+');
    line
}

/// The rule below the last row.
fn closing_rule(layout: &GalleryLayout, grid: i32) -> String {
    let mut line = String::new();
    for x in 1..=grid {
        let pos = Position::new(x, grid);
        line.push('+');
        line.push_str(edge_fill(
            layout.artwork_on_edge(pos, Edge::Bottom),
            layout.wall_on_edge(pos, Edge::Bottom),
        ));
    }
    line.push('+');
    line
}

fn edge_fill(artwork: bool, wall: bool) -> &'static str {
    if artwork {
        "==="
    } else if wall {
        "---"
    } else {
        "   "
    }
}

fn cell_row(layout: &GalleryLayout, user: &User, y: i32, grid: i32) -> String {
    let mut line = String::new();
    for x in 1..=grid {
        let here = Position::new(x, y);
        let left_neighbor = Position::new(x - 1, y);
        let artwork = layout.artwork_on_edge(here, Edge::Left)
            || layout.artwork_on_edge(left_neighbor, Edge::Right);
        let wall =
            layout.wall_on_edge(here, Edge::Left) || layout.wall_on_edge(left_neighbor, Edge::Right);
        line.push(vertical_edge(artwork, wall));
        line.push(' ');
        line.push(cell_glyph(layout, user, here));
        line.push(' ');
    }
    let last = Position::new(grid, y);
    line.push(vertical_edge(
        layout.artwork_on_edge(last, Edge::Right),
        layout.wall_on_edge(last, Edge::Right),
    ));
    line
}

fn vertical_edge(artwork: bool, wall: bool) -> char {
    if artwork {
        ':'
    } else if wall {
        '|'
    } else {
        ' '
    }
}

fn cell_glyph(layout: &GalleryLayout, user: &User, pos: Position) -> char {
    if user.position == pos {
        return match user.facing {
            Facing::Up => '^',
            Facing::Down => 'v',
            Facing::Left => '<',
            Facing::Right => '>',
        };
    }
    match layout.cell(pos) {
        Some(cell) if cell.artwork_id.is_some() => '*',
        _ => ' ',
    }
}
