//! Plain-text dumps of plate state.

use std::io::Write;

use crate::{Error, HeatPlate, Solver};

/// Writes every cell as `[row,col]=value`, top row of the plate first.
pub fn write_state<W: Write>(grid: ndarray::ArrayView2<f64>, mut writer: W) -> Result<(), Error> {
    for (i, row) in grid.outer_iter().enumerate().rev() {
        write!(writer, "[ ")?;
        for (j, value) in row.iter().enumerate() {
            write!(writer, "[{},{}]={:.4}  ", i, j, value)?;
        }
        writeln!(writer, "]\n")?;
    }
    Ok(())
}

pub fn write_current_state<S: Solver, W: Write>(
    plate: &HeatPlate<S>,
    mut writer: W,
) -> Result<(), Error> {
    writeln!(writer, "Current State: ")?;
    write_state(plate.current(), writer)
}

pub fn write_previous_state<S: Solver, W: Write>(
    plate: &HeatPlate<S>,
    mut writer: W,
) -> Result<(), Error> {
    writeln!(writer, "Previous State: ")?;
    write_state(plate.previous(), writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_print_last_to_first() {
        let grid = ndarray::arr2(&[[1.0, 0.0], [1.0, 0.123456]]);

        let mut buffer = Vec::new();
        write_state(grid.view(), &mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "[ [1,0]=1.0000  [1,1]=0.1235  ]\n\n\
             [ [0,0]=1.0000  [0,1]=0.0000  ]\n\n",
        );
    }
}
