// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the minimum-energy seam
//!
//! One dynamic-programming pass fills a table with the cheapest total
//! energy of any seam ending at each (stage, position); a walk back up
//! the table from the cheapest final cell recovers the seam.  The
//! search is written once, over stages and positions, and the
//! `Flipper` decides whether those are rows and columns or columns and
//! rows.
//!
//! The walk back compares costs in the stage being chosen, not the one
//! before it.  Each cell already holds the cheapest way of reaching it,
//! so the cheapest eligible cell in a stage is the right predecessor.

use crate::cq;
use crate::error::Result;
use crate::flipper::Flipper;
use crate::pixelgrid::PixelGrid;
use crate::seam::{Orientation, Seam};
use crate::seamfinder::SeamFinder;
use crate::twodmap::TwoDimensionalMap;
use log::trace;
use std::ops::RangeInclusive;

/// Cumulative costs, addressed as (position, stage).
pub(crate) type CostMap = TwoDimensionalMap<f64>;

// The positions a seam can move between from `position` to the next
// stage.  Clipped at both ends; unlike pixel addressing, the search
// never wraps.
fn neighbours(position: u32, last: u32) -> RangeInclusive<u32> {
    cq!(position == 0, 0, position - 1)..=cq!(position == last, last, position + 1)
}

// The first candidate with the least cost in `stage`.  A later
// candidate has to be strictly cheaper to take over, so ties go to the
// smallest position.
fn cheapest(cost: &CostMap, stage: u32, candidates: RangeInclusive<u32>) -> u32 {
    let first = *candidates.start();
    candidates
        .skip(1)
        .fold(first, |best, p| cq!(cost[(p, stage)] < cost[(best, stage)], p, best))
}

/// Fill the cost table: the first stage holds plain energies, and
/// every later cell adds its own energy to the cheapest of the (up to)
/// three cells that can lead into it.
pub(crate) fn cumulative_costs(view: &Flipper) -> Result<CostMap> {
    let (stages, positions) = (view.stages(), view.positions());
    let last = positions - 1;
    let mut cost = CostMap::new(positions, stages);

    for p in 0..positions {
        cost[(p, 0)] = view.energy(0, p)?;
    }

    for s in 1..stages {
        for p in 0..positions {
            let parent = neighbours(p, last)
                .map(|q| cost[(q, s - 1)])
                .fold(std::f64::INFINITY, f64::min);
            cost[(p, s)] = view.energy(s, p)? + parent;
        }
    }
    Ok(cost)
}

/// Given a filled cost table, return the position chosen at every
/// stage, stage 0 first.
pub(crate) fn backtrack(cost: &CostMap) -> Vec<u32> {
    let (positions, stages) = (cost.width(), cost.height());
    let last = positions - 1;

    let mut seam_pos = cheapest(cost, stages - 1, 0..=last);
    // Working backwards, collect one position per stage, then reverse.
    (0..stages - 1)
        .rev()
        .fold(vec![seam_pos], |mut acc, stage| {
            seam_pos = cheapest(cost, stage, neighbours(seam_pos, last));
            acc.push(seam_pos);
            acc
        })
        .into_iter()
        .rev()
        .collect()
}

/// Find the cheapest seam of the given orientation through the grid.
pub fn find_seam(grid: &PixelGrid, orientation: Orientation) -> Result<Seam> {
    let cost = cumulative_costs(&Flipper::new(grid, orientation))?;
    let seam = Seam::new(orientation, backtrack(&cost));
    trace!("{} seam: {:?}", orientation, seam.positions());
    Ok(seam)
}

/// The gradient-energy seam finder: just a reference to the grid.
pub struct GradientSeamFinder<'a> {
    pub grid: &'a PixelGrid,
}

impl<'a> GradientSeamFinder<'a> {
    pub fn new(grid: &'a PixelGrid) -> Self {
        GradientSeamFinder { grid }
    }
}

impl<'a> SeamFinder for GradientSeamFinder<'a> {
    fn find_horizontal_seam(&self) -> Result<Seam> {
        find_seam(self.grid, Orientation::Horizontal)
    }

    fn find_vertical_seam(&self) -> Result<Seam> {
        find_seam(self.grid, Orientation::Vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;
    use assert_approx_eq::assert_approx_eq;

    // Build a cost table from a list of stages.
    fn table(stages: &[&[f64]]) -> CostMap {
        let mut cost = CostMap::new(stages[0].len() as u32, stages.len() as u32);
        for (s, row) in stages.iter().enumerate() {
            for (p, c) in row.iter().enumerate() {
                cost[(p as u32, s as u32)] = *c;
            }
        }
        cost
    }

    const DIM: Pixel = Pixel::new(10, 10, 10);
    const BRIGHT: Pixel = Pixel::new(200, 200, 200);

    fn bright_centre() -> PixelGrid {
        let mut pixels = vec![DIM; 9];
        pixels[4] = BRIGHT;
        PixelGrid::new(3, 3, pixels).unwrap()
    }

    #[test]
    fn neighbours_are_clipped_not_wrapped() {
        assert_eq!(neighbours(0, 3), 0..=1);
        assert_eq!(neighbours(2, 3), 1..=3);
        assert_eq!(neighbours(3, 3), 2..=3);
        assert_eq!(neighbours(0, 0), 0..=0);
    }

    #[test]
    fn backtrack_reads_costs_at_the_stage_being_chosen() {
        // Looking one stage further back when choosing stage 1 would
        // pick position 1 (cost 1 in stage 0) instead of position 2.
        let cost = table(&[&[5.0, 1.0, 9.0], &[2.0, 7.0, 1.0], &[10.0, 4.0, 3.0]]);
        assert_eq!(backtrack(&cost), [1, 2, 2]);
    }

    #[test]
    fn backtrack_prefers_the_left_candidate_on_ties() {
        let cost = table(&[&[3.0, 1.0, 1.0, 1.0], &[9.0, 9.0, 2.0, 9.0]]);
        assert_eq!(backtrack(&cost), [1, 2]);
    }

    #[test]
    fn backtrack_prefers_the_centre_over_the_right_on_ties() {
        let cost = table(&[&[3.0, 5.0, 1.0, 1.0], &[9.0, 9.0, 2.0, 9.0]]);
        assert_eq!(backtrack(&cost), [2, 2]);
    }

    #[test]
    fn final_stage_ties_go_to_the_smallest_position() {
        let cost = table(&[&[0.0, 0.0, 0.0, 0.0], &[2.0, 9.0, 2.0, 9.0]]);
        assert_eq!(backtrack(&cost), [0, 0]);
    }

    #[test]
    fn uniform_grid_hugs_the_first_position() {
        let grid = PixelGrid::new(4, 3, vec![DIM; 12]).unwrap();
        let finder = GradientSeamFinder::new(&grid);
        assert_eq!(&finder.find_vertical_seam().unwrap()[..], [0, 0, 0]);
        assert_eq!(&finder.find_horizontal_seam().unwrap()[..], [0, 0, 0, 0]);
    }

    #[test]
    fn bright_centre_costs() {
        let grid = bright_centre();
        let spike = (3.0 * 190f64 * 190.0).sqrt();
        let cost = cumulative_costs(&Flipper::new(&grid, Orientation::Vertical)).unwrap();
        let expected = [[0.0, spike, 0.0], [spike, 0.0, spike], [0.0, spike, 0.0]];
        for (s, row) in expected.iter().enumerate() {
            for (p, c) in row.iter().enumerate() {
                assert_approx_eq!(cost[(p as u32, s as u32)], *c);
            }
        }
    }

    #[test]
    fn bright_centre_seams_follow_the_zero_energy_cells() {
        // The centre pixel's neighbours all match each other, so it has
        // no energy of its own; the cheap path runs corner, centre,
        // corner.  Stage 0 is a tie between both corners.
        let grid = bright_centre();
        let finder = GradientSeamFinder::new(&grid);
        let vertical = finder.find_vertical_seam().unwrap();
        assert_eq!(vertical.orientation(), Orientation::Vertical);
        assert_eq!(&vertical[..], [0, 1, 0]);
        assert_eq!(&finder.find_horizontal_seam().unwrap()[..], [0, 1, 0]);
    }

    #[test]
    fn seams_avoid_a_bright_column() {
        // Column 3 is bright, so columns 2 and 4 (its neighbours) carry
        // all the energy and column 3 itself carries none.  Column 0
        // is quiet too; the first quiet column wins.
        let width = 6;
        let height = 4;
        let pixels = (0..height)
            .flat_map(|_| (0..width).map(|x| cq!(x == 3, BRIGHT, DIM)))
            .collect();
        let grid = PixelGrid::new(width, height, pixels).unwrap();
        let seam = find_seam(&grid, Orientation::Vertical).unwrap();
        assert_eq!(&seam[..], [0, 0, 0, 0]);
    }

    #[test]
    fn seam_lengths_match_the_grid() {
        let pixels = (0..20).map(|i| Pixel::new(i * 13 % 7, i * 5 % 11, i)).collect();
        let grid = PixelGrid::new(5, 4, pixels).unwrap();
        let finder = GradientSeamFinder::new(&grid);
        assert_eq!(finder.find_vertical_seam().unwrap().len(), 4);
        assert_eq!(finder.find_horizontal_seam().unwrap().len(), 5);
    }

    #[test]
    fn single_column_and_single_row_grids() {
        let pixels = vec![Pixel::new(1, 2, 3), Pixel::new(4, 5, 6), Pixel::new(7, 8, 9)];
        let tall = PixelGrid::new(1, 3, pixels.clone()).unwrap();
        assert_eq!(&find_seam(&tall, Orientation::Vertical).unwrap()[..], [0, 0, 0]);
        assert_eq!(&find_seam(&tall, Orientation::Horizontal).unwrap()[..], [0]);

        let wide = PixelGrid::new(3, 1, pixels).unwrap();
        assert_eq!(&find_seam(&wide, Orientation::Horizontal).unwrap()[..], [0, 0, 0]);
        assert_eq!(find_seam(&wide, Orientation::Vertical).unwrap().len(), 1);
    }
}
