//! Map geometry: province outlines and the district cartogram

use contracts::enums::{District, Province};

pub const VIEW_WIDTH: f64 = 800.0;
pub const VIEW_HEIGHT: f64 = 1000.0;

const TILE_W: f64 = 130.0;
const TILE_H: f64 = 100.0;
const TILE_GAP: f64 = 10.0;
const TILE_COLUMNS: u8 = 4;
const TILE_TOP: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    District,
    Province,
}

impl Granularity {
    pub const ALL: [Granularity; 2] = [Granularity::District, Granularity::Province];

    pub fn label(&self) -> &'static str {
        match self {
            Granularity::District => "Districts",
            Granularity::Province => "Provinces",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Rect { x: f64, y: f64, w: f64, h: f64 },
}

/// One clickable region of the map
#[derive(Clone, Debug, PartialEq)]
pub struct RegionShape {
    /// Wire code, e.g. `NUWARA_ELIYA`
    pub code: &'static str,
    pub name: &'static str,
    pub shape: Shape,
    pub label_at: (f64, f64),
}

fn province_outline(p: Province) -> (&'static str, (f64, f64)) {
    match p {
        Province::Northern => (
            "M400,50 L500,80 L550,150 L520,200 L480,180 L420,150 L380,100 Z",
            (460.0, 130.0),
        ),
        Province::NorthWestern => (
            "M320,200 L420,150 L480,180 L480,250 L420,280 L360,260 Z",
            (400.0, 230.0),
        ),
        Province::Western => (
            "M360,260 L420,280 L450,350 L420,380 L360,360 Z",
            (400.0, 330.0),
        ),
        Province::NorthCentral => (
            "M480,180 L520,200 L580,250 L560,320 L520,300 L480,250 Z",
            (530.0, 260.0),
        ),
        Province::Central => (
            "M420,280 L480,250 L520,300 L500,370 L450,350 Z",
            (470.0, 310.0),
        ),
        Province::Sabaragamuwa => (
            "M360,360 L420,380 L450,450 L400,480 L350,450 Z",
            (400.0, 430.0),
        ),
        Province::Eastern => (
            "M580,250 L650,280 L670,400 L650,500 L600,520 L560,480 L560,320 Z",
            (610.0, 380.0),
        ),
        Province::Uva => (
            "M500,370 L560,380 L560,480 L520,500 L480,480 L450,450 Z",
            (510.0, 430.0),
        ),
        Province::Southern => (
            "M350,450 L400,480 L480,480 L520,500 L500,580 L420,600 L350,560 Z",
            (430.0, 530.0),
        ),
    }
}

/// (column, row) of a district tile; north at the top, west on the left
fn district_cell(d: District) -> (u8, u8) {
    match d {
        District::Jaffna => (1, 0),
        District::Kilinochchi => (1, 1),
        District::Mullaitivu => (2, 1),
        District::Mannar => (0, 2),
        District::Vavuniya => (1, 2),
        District::Trincomalee => (3, 2),
        District::Puttalam => (0, 3),
        District::Anuradhapura => (1, 3),
        District::Polonnaruwa => (2, 3),
        District::Batticaloa => (3, 3),
        District::Kurunegala => (1, 4),
        District::Matale => (2, 4),
        District::Ampara => (3, 4),
        District::Gampaha => (0, 5),
        District::Kegalle => (1, 5),
        District::Kandy => (2, 5),
        District::Badulla => (3, 5),
        District::Colombo => (0, 6),
        District::Ratnapura => (1, 6),
        District::NuwaraEliya => (2, 6),
        District::Monaragala => (3, 6),
        District::Kalutara => (0, 7),
        District::Galle => (1, 8),
        District::Matara => (2, 8),
        District::Hambantota => (3, 8),
    }
}

fn tile_left() -> f64 {
    let grid_w = f64::from(TILE_COLUMNS) * (TILE_W + TILE_GAP) - TILE_GAP;
    (VIEW_WIDTH - grid_w) / 2.0
}

fn district_tile(d: District) -> RegionShape {
    let (col, row) = district_cell(d);
    let x = tile_left() + f64::from(col) * (TILE_W + TILE_GAP);
    let y = TILE_TOP + f64::from(row) * (TILE_H + TILE_GAP);
    RegionShape {
        code: d.code(),
        name: d.display_name(),
        shape: Shape::Rect {
            x,
            y,
            w: TILE_W,
            h: TILE_H,
        },
        label_at: (x + TILE_W / 2.0, y + TILE_H / 2.0),
    }
}

fn province_shape(p: Province) -> RegionShape {
    let (path, label_at) = province_outline(p);
    RegionShape {
        code: p.code(),
        name: p.display_name(),
        shape: Shape::Path(path),
        label_at,
    }
}

pub fn shapes(granularity: Granularity) -> Vec<RegionShape> {
    match granularity {
        Granularity::District => District::ALL.iter().copied().map(district_tile).collect(),
        Granularity::Province => Province::ALL.iter().copied().map(province_shape).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_district_has_its_own_tile() {
        let cells: HashSet<_> = District::ALL.iter().map(|d| district_cell(*d)).collect();
        assert_eq!(cells.len(), 25);
    }

    #[test]
    fn tiles_fit_the_view_box() {
        for region in shapes(Granularity::District) {
            let Shape::Rect { x, y, w, h } = region.shape else {
                panic!("district {} is not a tile", region.code);
            };
            assert!(x >= 0.0 && x + w <= VIEW_WIDTH, "{}", region.code);
            assert!(y >= 0.0 && y + h <= VIEW_HEIGHT, "{}", region.code);
        }
    }

    #[test]
    fn provinces_are_closed_paths() {
        let provinces = shapes(Granularity::Province);
        assert_eq!(provinces.len(), 9);
        for region in provinces {
            let Shape::Path(d) = region.shape else {
                panic!("province {} is not a path", region.code);
            };
            assert!(d.starts_with('M') && d.ends_with('Z'));
        }
    }

    #[test]
    fn jaffna_sits_north_of_galle() {
        let (_, jaffna) = district_cell(District::Jaffna);
        let (_, galle) = district_cell(District::Galle);
        assert!(jaffna < galle);
    }
}
