//! Architectural equivalence checking.
//!
//! After every checked commit the reference model and the DUT must agree on
//! the program counter, the committed instruction word, and all 32
//! general-purpose registers. The comparison order is fixed and the first
//! mismatch wins: once one field diverges every later field is meaningless,
//! so none of them are evaluated.

use crate::common::constants::GPR_COUNT;
use crate::common::error::CosimError;
use crate::model::dut::Dut;
use crate::model::reference::RefModel;

/// Compares the reference model's post-commit state against the DUT's
/// committed state.
///
/// # Arguments
///
/// * `cycle` - Current cycle number, carried into any mismatch report.
/// * `dut` - The hardware model, read through its commit signals.
/// * `model` - The reference model, read after its matching step.
///
/// # Returns
///
/// `Ok(())` when all fields agree, otherwise the first mismatch in PC →
/// instruction → GPR index order.
pub fn check_commit<D: Dut, R: RefModel>(cycle: u64, dut: &D, model: &R) -> Result<(), CosimError> {
    let (model_pc, dut_pc) = (model.pc(), dut.commit_pc());
    if model_pc != dut_pc {
        return Err(CosimError::PcMismatch {
            cycle,
            model: model_pc,
            dut: dut_pc,
        });
    }

    let (model_instr, dut_instr) = (model.last_instr(), dut.commit_instr());
    if model_instr != dut_instr {
        return Err(CosimError::InstrMismatch {
            cycle,
            model: model_instr,
            dut: dut_instr,
        });
    }

    for index in 0..GPR_COUNT {
        let (model_gpr, dut_gpr) = (model.gpr(index), dut.commit_gpr(index));
        if model_gpr != dut_gpr {
            return Err(CosimError::GprMismatch {
                cycle,
                index,
                model: model_gpr,
                dut: dut_gpr,
            });
        }
    }

    Ok(())
}
