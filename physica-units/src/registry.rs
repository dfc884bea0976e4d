//! Process-wide family registry: populated once, read-only afterwards.
//!
//! A [`RegistryBuilder`] accumulates family definitions and seals them into
//! a [`Registry`], resolving every association name to a [`FamilyId`] and
//! failing fast on a dangling reference. The sealed registry is installed as
//! the process-wide one exactly once; the standard set installs itself
//! lazily if nothing else was installed first.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::UnitError;
use crate::family::{Family, FamilyDef, FamilyId};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Accumulates family definitions before sealing.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    defs: Vec<FamilyDef>,
    by_name: HashMap<String, FamilyId>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a family under its name.
    pub fn register(&mut self, def: FamilyDef) -> Result<FamilyId, UnitError> {
        if self.by_name.contains_key(&def.name) {
            return Err(UnitError::DuplicateFamily(def.name.clone()));
        }
        let id = FamilyId::new(self.defs.len() as u32);
        self.by_name.insert(def.name.clone(), id);
        self.defs.push(def);
        Ok(id)
    }

    /// Seal the registry. Every family name referenced by an association
    /// table must resolve here, otherwise the build fails with
    /// [`UnitError::UnknownFamily`].
    pub fn build(self) -> Result<Registry, UnitError> {
        let by_name = self.by_name;
        let resolve = |name: &str| -> Result<FamilyId, UnitError> {
            by_name
                .get(name)
                .copied()
                .ok_or_else(|| UnitError::UnknownFamily(name.to_string()))
        };

        let mut families = Vec::with_capacity(self.defs.len());
        for def in self.defs {
            let mut multiply = HashMap::new();
            for (other, result) in &def.multiply {
                multiply.insert(resolve(other)?, resolve(result)?);
            }
            let mut divide = HashMap::new();
            for (other, result) in &def.divide {
                divide.insert(resolve(other)?, resolve(result)?);
            }
            let inverse = def.inverse.as_deref().map(resolve).transpose()?;
            families.push(Family {
                name: def.name,
                singular: def.singular,
                plural: def.plural,
                conversions: def.units.into_iter().collect(),
                multiply,
                divide,
                inverse,
            });
        }
        Ok(Registry { families, by_name })
    }
}

/// Sealed, immutable lookup from family identity to its descriptor.
#[derive(Debug)]
pub struct Registry {
    families: Vec<Family>,
    by_name: HashMap<String, FamilyId>,
}

impl Registry {
    /// The process-wide registry. Installs the standard family set on first
    /// use unless a custom registry was installed earlier.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(|| {
            crate::standard::builder()
                .build()
                .expect("standard family set is internally consistent")
        })
    }

    /// Install this registry as the process-wide one. Must happen before the
    /// first quantity is constructed; a second install fails.
    pub fn install(self) -> Result<(), UnitError> {
        GLOBAL.set(self).map_err(|_| UnitError::RegistryInstalled)
    }

    /// Look a family up by name.
    pub fn resolve(&self, name: &str) -> Result<FamilyId, UnitError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| UnitError::UnknownFamily(name.to_string()))
    }

    /// Descriptor of a registered family, or `None` for an id this registry
    /// never issued (e.g. from a builder that was never installed).
    pub fn family(&self, id: FamilyId) -> Option<&Family> {
        self.families.get(id.index())
    }

    /// All registered families.
    pub fn families(&self) -> impl Iterator<Item = (FamilyId, &Family)> {
        self.families
            .iter()
            .enumerate()
            .map(|(index, family)| (FamilyId::new(index as u32), family))
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}
