//! Panel layout via Taffy.
//!
//! The dashboard is one flex column. Full-width panels stack directly in it;
//! consecutive tiles are grouped into a wrapping flex row, so they sit side by
//! side when the terminal is wide and stack when it is narrow. Panel heights
//! come from a measure callback, the way text nodes are measured.

use taffy::{
    AvailableSpace, Dimension, Display, FlexDirection, FlexWrap, LengthPercentage, NodeId, Size,
    Style, TaffyResult, TaffyTree,
};

use crate::types::Rect;

/// Minimum width of a tile, in cells.
pub const MIN_TILE_WIDTH: u16 = 36;

/// How a panel is placed in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Spans the full terminal width.
    FullWidth,
    /// Shares a wrapping row with neighbouring tiles.
    Tile,
}

fn full_width_style() -> Style {
    Style {
        size: Size {
            width: Dimension::Percent(1.0),
            height: Dimension::Auto,
        },
        flex_shrink: 0.0,
        ..Default::default()
    }
}

fn tile_style() -> Style {
    Style {
        flex_basis: Dimension::Length(MIN_TILE_WIDTH as f32),
        flex_grow: 1.0,
        flex_shrink: 0.0,
        min_size: Size {
            width: Dimension::Length(MIN_TILE_WIDTH as f32),
            height: Dimension::Auto,
        },
        ..Default::default()
    }
}

fn row_style() -> Style {
    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        flex_wrap: FlexWrap::Wrap,
        flex_shrink: 0.0,
        gap: Size {
            width: LengthPercentage::Length(1.0),
            height: LengthPercentage::Length(0.0),
        },
        size: Size {
            width: Dimension::Percent(1.0),
            height: Dimension::Auto,
        },
        ..Default::default()
    }
}

/// Lay out panels for a terminal `width` cells wide.
///
/// `measure(index, width)` returns the height panel `index` needs at `width`.
/// Returns one absolute rect per placement, in the same order.
pub fn layout_panels<M>(placements: &[Placement], width: u16, mut measure: M) -> TaffyResult<Vec<Rect>>
where
    M: FnMut(usize, u16) -> u16,
{
    let mut tree: TaffyTree<usize> = TaffyTree::new();

    // Leaves, plus the row container each one sits in (if any)
    let mut leaves: Vec<(NodeId, Option<NodeId>)> = Vec::with_capacity(placements.len());
    let mut root_children: Vec<NodeId> = Vec::new();
    let mut row: Option<(NodeId, Vec<NodeId>)> = None;

    for (index, placement) in placements.iter().enumerate() {
        match placement {
            Placement::FullWidth => {
                if let Some((row_id, children)) = row.take() {
                    tree.set_children(row_id, &children)?;
                }
                let leaf = tree.new_leaf_with_context(full_width_style(), index)?;
                root_children.push(leaf);
                leaves.push((leaf, None));
            }
            Placement::Tile => {
                if row.is_none() {
                    let row_id = tree.new_leaf(row_style())?;
                    root_children.push(row_id);
                    row = Some((row_id, Vec::new()));
                }
                let leaf = tree.new_leaf_with_context(tile_style(), index)?;
                if let Some((row_id, children)) = row.as_mut() {
                    children.push(leaf);
                    leaves.push((leaf, Some(*row_id)));
                }
            }
        }
    }
    if let Some((row_id, children)) = row.take() {
        tree.set_children(row_id, &children)?;
    }

    let root = tree.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size {
                width: Dimension::Length(width as f32),
                height: Dimension::Auto,
            },
            ..Default::default()
        },
        &root_children,
    )?;

    let available = Size {
        width: AvailableSpace::Definite(width as f32),
        height: AvailableSpace::MaxContent,
    };

    let mut measure_fn = |known_dimensions: Size<Option<f32>>,
                          available_space: Size<AvailableSpace>,
                          _node_id: NodeId,
                          context: Option<&mut usize>,
                          _style: &Style| {
        let Some(&mut index) = context else {
            return Size::ZERO;
        };
        // Panels have no intrinsic width; they take what flex gives them.
        let resolved = known_dimensions.width.or(match available_space.width {
            AvailableSpace::Definite(w) => Some(w),
            _ => None,
        });
        let measure_width = resolved.map_or(width, |w| w.round() as u16);
        let height = known_dimensions
            .height
            .unwrap_or_else(|| measure(index, measure_width) as f32);
        Size {
            width: resolved.unwrap_or(0.0),
            height,
        }
    };

    tree.compute_layout_with_measure(root, available, &mut measure_fn)?;

    let mut rects = Vec::with_capacity(leaves.len());
    for (leaf, parent) in leaves {
        let layout = tree.layout(leaf)?;
        let (offset_x, offset_y) = match parent {
            Some(parent) => {
                let parent_layout = tree.layout(parent)?;
                (parent_layout.location.x, parent_layout.location.y)
            }
            None => (0.0, 0.0),
        };
        rects.push(Rect::new(
            (offset_x + layout.location.x).round() as u16,
            (offset_y + layout.location.y).round() as u16,
            layout.size.width.round() as u16,
            layout.size.height.round() as u16,
        ));
    }

    Ok(rects)
}

/// Plain vertical stack at full width, used when flex layout fails.
pub fn stack_panels<M>(count: usize, width: u16, mut measure: M) -> Vec<Rect>
where
    M: FnMut(usize, u16) -> u16,
{
    let mut y = 0u16;
    (0..count)
        .map(|index| {
            let height = measure(index, width);
            let rect = Rect::new(0, y, width, height);
            y = y.saturating_add(height);
            rect
        })
        .collect()
}
