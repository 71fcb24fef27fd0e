//! Domain nodes attached directly under `Root`
//!
//! Each node is a coarse default for its domain; its exceptions are listed in
//! priority order.

use crate::{names, refinements};
use nanordr_domain::{Affinity, Conclusion, MonolayerOrder};
use nanordr_engine::RuleNode;

pub(crate) fn biomolecule() -> RuleNode {
    RuleNode::from_fns(
        names::BIOMOLECULE_NODE,
        "biomolecule",
        |case| case.biomolecule.text("type").is_set(),
        |_| Conclusion::predict(Affinity::Moderate, MonolayerOrder::Ordered).with_rule_confidence(0.5),
    )
    .with_exception(refinements::rna_binding())
    .with_exception(refinements::liposomal_rna())
}

pub(crate) fn material() -> RuleNode {
    RuleNode::from_fns(
        names::MATERIAL_NODE,
        "nanoparticle",
        |case| case.nanoparticle.text("type").is_set(),
        |_| Conclusion::predict(Affinity::Low, MonolayerOrder::NoLayer).with_rule_confidence(0.3),
    )
    // SPIO refines metallic, so it must come first
    .with_exception(refinements::spio_corona())
    .with_exception(refinements::metallic_adsorption())
    .with_exception(refinements::polymeric_encapsulation())
    .with_exception(refinements::lipid_general())
}

pub(crate) fn charge_interaction() -> RuleNode {
    RuleNode::from_fns(
        names::CHARGE_NODE,
        "charge",
        |case| {
            case.nanoparticle.text("surface_charge").is_set() || case.surface.text("charge").is_set()
        },
        |_| Conclusion::predict(Affinity::Moderate, MonolayerOrder::Partial).with_rule_confidence(0.4),
    )
    .with_exception(refinements::electrostatic_binding())
    .with_exception(refinements::lipid_exception())
}

pub(crate) fn surface_feature() -> RuleNode {
    RuleNode::from_fns(
        names::SURFACE_NODE,
        "surface",
        |case| case.surface.text("material").is_set(),
        |case| {
            let affinity = if case.surface.text("material").is("peg") {
                Affinity::Low
            } else {
                Affinity::Moderate
            };
            Conclusion::predict(affinity, MonolayerOrder::Fluid).with_rule_confidence(0.45)
        },
    )
    .with_exception(refinements::pegylated_neutralization())
    .with_exception(refinements::pegylated_polymeric())
}

pub(crate) fn ligand_property() -> RuleNode {
    RuleNode::from_fns(
        names::LIGAND_NODE,
        "ligand",
        |case| case.ligand.text("type").is_set(),
        |case| {
            let conclusion = if case.ligand.text("polarity").is("polar") {
                Conclusion::predict(Affinity::Moderate, MonolayerOrder::Ordered)
            } else {
                Conclusion::predict(Affinity::Low, MonolayerOrder::Fluid)
            };
            conclusion.with_rule_confidence(0.4)
        },
    )
    .with_exception(refinements::hydrophobic_adsorption())
    .with_exception(refinements::hydrophilic_repulsion())
    .with_exception(refinements::antibody_targeting())
}
