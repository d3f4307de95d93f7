use std::collections::HashMap;

use crate::{
    ast::types::{BasicType, Value},
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::coercion::coerce;

/// One declared variable. Its declared type never changes after declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VarInfo {
    pub name: String,
    pub var_type: BasicType,
    pub value: Value,
}

/// The execution context: a single flat namespace from variable name to `VarInfo`.
#[derive(Debug, Default)]
pub struct Environment {
    variable_lookup: HashMap<String, VarInfo>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn declare(
        &mut self,
        variable_name: &str,
        variable_type: BasicType,
        value: Value,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.variable_lookup.contains_key(variable_name) {
            Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: variable_name.to_string(),
                },
                current_position,
            ))
        } else {
            self.variable_lookup.insert(
                variable_name.to_string(),
                VarInfo {
                    name: variable_name.to_string(),
                    var_type: variable_type,
                    value,
                },
            );
            Ok(())
        }
    }

    /// Stores `value` into an existing variable, narrowing it to the declared type.
    pub fn assign(
        &mut self,
        variable_name: &str,
        value: Value,
        current_position: Position,
    ) -> Result<(), Error> {
        let Some(variable) = self.variable_lookup.get_mut(variable_name) else {
            return Err(Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: variable_name.to_string(),
                },
                current_position,
            ));
        };

        variable.value = coerce(variable.var_type, value, variable_name, &current_position)?;
        Ok(())
    }

    pub fn lookup(&self, variable_name: &str, current_position: Position) -> Result<&VarInfo, Error> {
        self.variable_lookup.get(variable_name).ok_or_else(|| {
            Error::new(
                ErrorImpl::VariableNotDeclared {
                    variable: variable_name.to_string(),
                },
                current_position,
            )
        })
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<&VarInfo> {
        self.variable_lookup.get(variable_name)
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}
