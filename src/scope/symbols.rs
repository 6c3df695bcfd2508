use crate::ast::{
    ast::{AssociatedItem, ConstantItem, FunctionItem, Item, StructField},
    types::Type,
};

/// An entity a name can refer to.
#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Variable {
        name: String,
        ty: Option<Type>,
        mutable: bool,
    },
    Function {
        name: String,
        param_types: Vec<Type>,
        return_type: Option<Type>,
    },
    Struct {
        name: String,
        fields: Option<Vec<StructField>>,
    },
    Enum {
        name: String,
        variants: Vec<String>,
    },
    Trait {
        name: String,
        items: Vec<String>,
    },
    Impl {
        target: Type,
        trait_name: Option<String>,
        items: Vec<String>,
    },
    Constant {
        name: String,
        ty: Type,
    },
}

impl Symbol {
    /// Builds the symbol an item declares.
    pub fn from_item(item: &Item) -> Symbol {
        match item {
            Item::Function(function) => Symbol::function(function),
            Item::Struct(structure) => Symbol::Struct {
                name: structure.name.value.clone(),
                fields: structure.fields.clone(),
            },
            Item::Enum(enumeration) => Symbol::Enum {
                name: enumeration.name.value.clone(),
                variants: enumeration
                    .variants
                    .iter()
                    .map(|variant| variant.value.clone())
                    .collect(),
            },
            Item::Constant(constant) => Symbol::constant(constant),
            Item::Trait(trait_item) => Symbol::Trait {
                name: trait_item.name.value.clone(),
                items: trait_item
                    .items
                    .iter()
                    .map(|item| item.name().value.clone())
                    .collect(),
            },
            Item::Impl(impl_item) => Symbol::Impl {
                target: impl_item.target.clone(),
                trait_name: impl_item
                    .trait_name
                    .as_ref()
                    .map(|name| name.value.clone()),
                items: impl_item
                    .items
                    .iter()
                    .map(|item| item.name().value.clone())
                    .collect(),
            },
        }
    }

    pub fn from_associated_item(item: &AssociatedItem) -> Symbol {
        match item {
            AssociatedItem::Constant(constant) => Symbol::constant(constant),
            AssociatedItem::Function(function) => Symbol::function(function),
        }
    }

    fn function(function: &FunctionItem) -> Symbol {
        Symbol::Function {
            name: function.name.value.clone(),
            param_types: function
                .params
                .iter()
                .map(|param| param.ty.clone())
                .collect(),
            return_type: function.return_type.clone(),
        }
    }

    fn constant(constant: &ConstantItem) -> Symbol {
        Symbol::Constant {
            name: constant.name.value.clone(),
            ty: constant.ty.clone(),
        }
    }

    /// The key this symbol is stored under in a scope.
    ///
    /// Impls have no name of their own and are keyed by their header,
    /// `impl Trait for Type` or `impl Type`.
    pub fn key(&self) -> String {
        match self {
            Symbol::Variable { name, .. }
            | Symbol::Function { name, .. }
            | Symbol::Struct { name, .. }
            | Symbol::Enum { name, .. }
            | Symbol::Trait { name, .. }
            | Symbol::Constant { name, .. } => name.clone(),
            Symbol::Impl {
                target,
                trait_name: Some(trait_name),
                ..
            } => format!("impl {} for {}", trait_name, target),
            Symbol::Impl { target, .. } => format!("impl {}", target),
        }
    }

    /// Whether a bare identifier pattern naming this symbol refers to it
    /// rather than introducing a fresh binding.
    pub fn is_pattern_constant(&self) -> bool {
        match self {
            Symbol::Constant { .. } => true,
            Symbol::Struct { fields, .. } => fields.is_none(),
            _ => false,
        }
    }
}
