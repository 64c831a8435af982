//! Host types: the object model templates reach into through `import`.
//!
//! A [`HostType`] describes a type the embedding program exposes: its path,
//! its public fields, and its constructors and methods with native bodies.
//! Overloads are resolved by arity and per-parameter [`ParamType`]
//! compatibility; the first matching candidate wins. `null` is accepted by
//! every parameter type.
//!
//! The interpreter only sees types through [`TypeResolver`], so any lookup
//! strategy can be plugged in. [`HostRegistry`] is the map-backed default.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::Value;

/// Failure reported by a native constructor or method body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HostError {
    pub message: String,
}

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        HostError {
            message: message.into(),
        }
    }
}

/// Declared type of a constructor or method parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamType {
    Any,
    Bool,
    Int,
    Long,
    Float,
    Double,
    BigInt,
    BigDecimal,
    Str,
    Bytes,
    Function,
    /// An object of the host type with this path.
    Object(String),
}

impl ParamType {
    /// Whether a non-null argument can be passed for this parameter.
    ///
    /// Numeric parameters accept narrower numeric kinds the way a widening
    /// primitive conversion would.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (ParamType::Any, _)
            | (ParamType::Bool, Value::Bool(_))
            | (ParamType::Int, Value::Int(_))
            | (ParamType::Long, Value::Int(_) | Value::Long(_))
            | (ParamType::Float, Value::Int(_) | Value::Long(_) | Value::Float(_))
            | (
                ParamType::Double,
                Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Double(_),
            )
            | (ParamType::BigInt, Value::Int(_) | Value::Long(_) | Value::BigInt(_))
            | (
                ParamType::BigDecimal,
                Value::Int(_)
                | Value::Long(_)
                | Value::Float(_)
                | Value::Double(_)
                | Value::BigInt(_)
                | Value::BigDecimal(_),
            )
            | (ParamType::Str, Value::Str(_))
            | (ParamType::Bytes, Value::Bytes(_))
            | (ParamType::Function, Value::Function(_)) => true,
            (ParamType::Object(path), Value::Object(obj)) => obj.host_type().path() == path,
            _ => false,
        }
    }
}

fn matches_signature(params: &[ParamType], args: &[Value]) -> bool {
    params.len() == args.len()
        && params
            .iter()
            .zip(args)
            .all(|(param, arg)| arg.is_null() || param.accepts(arg))
}

type ConstructorBody = dyn Fn(&Rc<HostType>, &[Value]) -> Result<Value, HostError>;
type MethodBody = dyn Fn(Option<&HostObject>, &[Value]) -> Result<Value, HostError>;

pub struct Constructor {
    params: Vec<ParamType>,
    body: Rc<ConstructorBody>,
}

impl Constructor {
    pub fn params(&self) -> &[ParamType] {
        &self.params
    }

    pub fn invoke(&self, ty: &Rc<HostType>, args: &[Value]) -> Result<Value, HostError> {
        (self.body)(ty, args)
    }
}

pub struct Method {
    name: String,
    params: Vec<ParamType>,
    is_static: bool,
    body: Rc<MethodBody>,
}

impl Method {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[ParamType] {
        &self.params
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Run the body. `receiver` is `None` for static calls.
    pub fn invoke(&self, receiver: Option<&HostObject>, args: &[Value]) -> Result<Value, HostError> {
        (self.body)(receiver, args)
    }
}

/// Descriptor of a host type.
pub struct HostType {
    path: String,
    fields: Vec<String>,
    constructors: Vec<Constructor>,
    methods: Vec<Method>,
}

impl HostType {
    pub fn builder(path: impl Into<String>) -> HostTypeBuilder {
        HostTypeBuilder {
            ty: HostType {
                path: path.into(),
                fields: Vec::new(),
                constructors: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    /// Fully-qualified path, e.g. `app.model.User`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last path segment.
    pub fn simple_name(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn find_constructor(&self, args: &[Value]) -> Option<&Constructor> {
        self.constructors
            .iter()
            .find(|ctor| matches_signature(&ctor.params, args))
    }

    /// First method named `name` whose signature accepts `args`.
    pub fn find_method(&self, name: &str, args: &[Value], static_only: bool) -> Option<&Method> {
        self.methods.iter().find(|method| {
            method.name == name
                && (!static_only || method.is_static)
                && matches_signature(&method.params, args)
        })
    }
}

impl fmt::Debug for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostType")
            .field("path", &self.path)
            .field("fields", &self.fields)
            .field("constructors", &self.constructors.len())
            .field(
                "methods",
                &self.methods.iter().map(Method::name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for [`HostType`].
pub struct HostTypeBuilder {
    ty: HostType,
}

impl HostTypeBuilder {
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.ty.fields.push(name.into());
        self
    }

    #[must_use]
    pub fn constructor<F>(mut self, params: Vec<ParamType>, body: F) -> Self
    where
        F: Fn(&Rc<HostType>, &[Value]) -> Result<Value, HostError> + 'static,
    {
        self.ty.constructors.push(Constructor {
            params,
            body: Rc::new(body),
        });
        self
    }

    /// Zero-argument constructor producing an object with every declared
    /// field set to `null`.
    #[must_use]
    pub fn default_constructor(self) -> Self {
        self.constructor(Vec::new(), |ty, _| {
            Ok(Value::Object(HostObject::new(Rc::clone(ty))))
        })
    }

    #[must_use]
    pub fn method<F>(mut self, name: impl Into<String>, params: Vec<ParamType>, body: F) -> Self
    where
        F: Fn(Option<&HostObject>, &[Value]) -> Result<Value, HostError> + 'static,
    {
        self.ty.methods.push(Method {
            name: name.into(),
            params,
            is_static: false,
            body: Rc::new(body),
        });
        self
    }

    #[must_use]
    pub fn static_method<F>(
        mut self,
        name: impl Into<String>,
        params: Vec<ParamType>,
        body: F,
    ) -> Self
    where
        F: Fn(Option<&HostObject>, &[Value]) -> Result<Value, HostError> + 'static,
    {
        self.ty.methods.push(Method {
            name: name.into(),
            params,
            is_static: true,
            body: Rc::new(body),
        });
        self
    }

    pub fn build(self) -> Rc<HostType> {
        Rc::new(self.ty)
    }
}

/// Instance of a host type. Clones share the same field storage.
#[derive(Clone)]
pub struct HostObject {
    ty: Rc<HostType>,
    fields: Rc<RefCell<FxHashMap<String, Value>>>,
}

impl HostObject {
    pub fn new(ty: Rc<HostType>) -> Self {
        let fields = ty
            .fields
            .iter()
            .map(|name| (name.clone(), Value::Null))
            .collect();
        HostObject {
            ty,
            fields: Rc::new(RefCell::new(fields)),
        }
    }

    #[inline]
    pub fn host_type(&self) -> &Rc<HostType> {
        &self.ty
    }

    /// Value of a declared field, `None` if the type has no such field.
    pub fn get_field(&self, name: &str) -> Option<Value> {
        self.fields.borrow().get(name).cloned()
    }

    /// Store into a declared field. Returns `false` if there is no such field.
    pub fn set_field(&self, name: &str, value: Value) -> bool {
        match self.fields.borrow_mut().get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn ptr_eq(&self, other: &HostObject) -> bool {
        Rc::ptr_eq(&self.fields, &other.fields)
    }
}

impl fmt::Debug for HostObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostObject")
            .field("type", &self.ty.path)
            .field("fields", &self.fields.borrow())
            .finish()
    }
}

/// Resolves an imported path to a host type.
pub trait TypeResolver {
    fn resolve(&self, path: &str) -> Option<Rc<HostType>>;
}

/// Map-backed [`TypeResolver`].
#[derive(Default)]
pub struct HostRegistry {
    types: FxHashMap<String, Rc<HostType>>,
}

impl HostRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type under its path, replacing any previous registration.
    pub fn register(&mut self, ty: Rc<HostType>) {
        self.types.insert(ty.path.clone(), ty);
    }

    pub fn get(&self, path: &str) -> Option<&Rc<HostType>> {
        self.types.get(path)
    }

    pub fn types(&self) -> impl Iterator<Item = &Rc<HostType>> {
        self.types.values()
    }
}

impl TypeResolver for HostRegistry {
    fn resolve(&self, path: &str) -> Option<Rc<HostType>> {
        self.types.get(path).cloned()
    }
}

impl fmt::Debug for HostRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut paths: Vec<&str> = self.types.keys().map(String::as_str).collect();
        paths.sort_unstable();
        f.debug_struct("HostRegistry").field("types", &paths).finish()
    }
}
