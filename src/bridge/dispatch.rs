//! ### English
//! The dynamic call entry: WebGL method name + wire arguments → queued operation.
//!
//! One process-wide table maps every known method name to its minimum arity, whether it needs a
//! WebGL2 context, and how to handle it. Calls whose arguments are all plain numbers and that
//! return nothing share one generic handler; everything else has a dedicated decoder that forwards
//! to the typed [`BridgeContext`] surface.
//!
//! Checks run in this order: unknown name, unsupported method, WebGL2 gate, arity.
//!
//! ### 中文
//! 动态调用入口：WebGL 方法名 + 线上参数 → 队列操作。
//!
//! 进程级的方法表把每个已知方法名映射到其最小参数个数、是否需要 WebGL2 上下文，以及处理方式。
//! 参数全是普通数值且无返回值的调用共享一个通用处理器；其余调用各有专门的解码器，转发到类型化的
//! [`BridgeContext`] 调用面。
//!
//! 检查顺序：未知名称、不支持的方法、WebGL2 门槛、参数个数。

mod handlers;
mod scalars;

use std::collections::HashMap;
use std::sync::LazyLock;

use gleam::gl::{GLenum, GLfloat, GLint, GLuint};

use super::backend::GlApi;
use super::context::BridgeContext;
use super::error::{BridgeError, Result};
use super::value::{Args, Value};

/// Widest all-scalar call (`blitFramebuffer`).
const MAX_SCALARS: usize = 10;

/// ### English
/// Numeric arguments of an all-scalar call, captured by value.
///
/// `null`/`undefined` arguments are kept as NaN so that a null uniform location can be told apart
/// from location 0; every other accessor reads NaN as 0.
///
/// ### 中文
/// 全标量调用的数值参数，按值捕获。
///
/// `null`/`undefined` 参数以 NaN 保存，以便区分 null 的 uniform 位置与位置 0；其它访问器均把
/// NaN 读作 0。
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scalars([f64; MAX_SCALARS]);

impl Scalars {
    fn read(args: Args<'_>, count: usize) -> Result<Self> {
        let mut values = [0.0; MAX_SCALARS];
        for (index, slot) in values.iter_mut().enumerate().take(count) {
            let value = args.get(index);
            *slot = if value.is_nullish() {
                f64::NAN
            } else {
                value.as_f64().ok_or(BridgeError::InvalidArgument {
                    index,
                    expected: "number",
                })?
            };
        }
        Ok(Self(values))
    }

    fn raw(&self, index: usize) -> f64 {
        let value = self.0[index];
        if value.is_nan() { 0.0 } else { value }
    }

    pub(crate) fn f(&self, index: usize) -> GLfloat {
        self.raw(index) as GLfloat
    }

    pub(crate) fn d(&self, index: usize) -> f64 {
        self.raw(index)
    }

    pub(crate) fn i(&self, index: usize) -> GLint {
        self.raw(index) as i64 as GLint
    }

    pub(crate) fn u(&self, index: usize) -> GLuint {
        self.raw(index) as i64 as GLuint
    }

    pub(crate) fn e(&self, index: usize) -> GLenum {
        self.u(index)
    }

    pub(crate) fn b(&self, index: usize) -> bool {
        self.raw(index) != 0.0
    }

    /// Uniform location; `null` becomes `-1`, which GL ignores.
    pub(crate) fn location(&self, index: usize) -> GLint {
        if self.0[index].is_nan() {
            -1
        } else {
            self.i(index)
        }
    }
}

pub(crate) type ScalarFn = fn(&dyn GlApi, &Scalars);
pub(crate) type CallFn = fn(&BridgeContext, Args<'_>) -> Result<Value>;

#[derive(Clone, Copy)]
enum Handler {
    /// Fire-and-forget call with numeric arguments only.
    Scalars(ScalarFn),
    Call(CallFn),
    Unsupported,
}

#[derive(Clone, Copy)]
struct Method {
    min_args: usize,
    webgl2: bool,
    handler: Handler,
}

/// Builder for the method table.
#[derive(Default)]
pub(crate) struct MethodTable(HashMap<&'static str, Method>);

impl MethodTable {
    fn insert(&mut self, name: &'static str, min_args: usize, webgl2: bool, handler: Handler) {
        let previous = self.0.insert(
            name,
            Method {
                min_args,
                webgl2,
                handler,
            },
        );
        debug_assert!(previous.is_none(), "method {name} registered twice");
    }

    pub(crate) fn scalar(&mut self, name: &'static str, arity: usize, apply: ScalarFn) {
        debug_assert!(arity <= MAX_SCALARS);
        self.insert(name, arity, false, Handler::Scalars(apply));
    }

    pub(crate) fn scalar2(&mut self, name: &'static str, arity: usize, apply: ScalarFn) {
        debug_assert!(arity <= MAX_SCALARS);
        self.insert(name, arity, true, Handler::Scalars(apply));
    }

    pub(crate) fn call(&mut self, name: &'static str, min_args: usize, call: CallFn) {
        self.insert(name, min_args, false, Handler::Call(call));
    }

    pub(crate) fn call2(&mut self, name: &'static str, min_args: usize, call: CallFn) {
        self.insert(name, min_args, true, Handler::Call(call));
    }

    pub(crate) fn unsupported(&mut self, names: &[&'static str]) {
        for &name in names {
            self.insert(name, 0, false, Handler::Unsupported);
        }
    }
}

static METHODS: LazyLock<HashMap<&'static str, Method>> = LazyLock::new(|| {
    let mut table = MethodTable::default();
    scalars::register(&mut table);
    handlers::register(&mut table);
    table.0
});

impl BridgeContext {
    /// ### English
    /// Calls a WebGL method by its wire name.
    ///
    /// Fire-and-forget methods return `undefined` right away; getters block until the GL thread has
    /// answered. Argument errors are reported before anything is queued.
    ///
    /// #### Parameters
    /// - `name`: WebGL method name, e.g. `"bindTexture"`.
    /// - `args`: positional arguments; missing trailing ones read as `undefined`.
    ///
    /// ### 中文
    /// 通过线上名称调用 WebGL 方法。
    ///
    /// 即发即弃的方法立即返回 `undefined`；getter 会阻塞直到 GL 线程给出结果。参数错误在任何操作
    /// 入队之前报告。
    ///
    /// #### 参数
    /// - `name`：WebGL 方法名，例如 `"bindTexture"`。
    /// - `args`：位置参数；缺失的尾部参数视为 `undefined`。
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let Some((&name, method)) = METHODS.get_key_value(name) else {
            return Err(BridgeError::UnknownMethod(name.to_owned()));
        };
        if let Handler::Unsupported = method.handler {
            return Err(BridgeError::Unsupported(name));
        }
        if method.webgl2 && !self.supports_webgl2() {
            return Err(BridgeError::RequiresWebGL2(name));
        }
        if args.len() < method.min_args {
            return Err(BridgeError::TooFewArguments {
                method: name,
                expected: method.min_args,
                actual: args.len(),
            });
        }
        let args = Args::new(args);
        match method.handler {
            Handler::Scalars(apply) => {
                let scalars = Scalars::read(args, method.min_args)?;
                self.enqueue(move |session| {
                    apply(session.gl, &scalars);
                    Ok(())
                });
                Ok(Value::Undefined)
            }
            Handler::Call(call) => call(self, args),
            Handler::Unsupported => Err(BridgeError::Unsupported(name)),
        }
    }
}

/// Whether `name` is a method the bridge knows about (implemented or not).
pub fn is_known_method(name: &str) -> bool {
    METHODS.contains_key(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::constants::*;
    use crate::bridge::flags::ContextOptions;
    use crate::bridge::testing::{FakeGl, GlThread};
    use crate::bridge::value::TypedArray;

    fn n(value: impl Into<f64>) -> Value {
        Value::Number(value.into())
    }

    fn flushed_context(thread: &GlThread) -> std::sync::Arc<BridgeContext> {
        let context = thread.context(ContextOptions::default());
        context.flush_exp().unwrap();
        context
    }

    #[test]
    fn scalars_read_null_as_zero_except_for_locations() {
        let values = [Value::Null, n(2.9), Value::Bool(true), n(-1)];
        let scalars = Scalars::read(Args::new(&values), 4).unwrap();
        assert_eq!(scalars.i(0), 0);
        assert_eq!(scalars.location(0), -1);
        assert_eq!(scalars.i(1), 2);
        assert!(scalars.b(2));
        assert_eq!(scalars.location(3), -1);
        assert_eq!(scalars.u(3), u32::MAX);

        let bad = [Value::from("x")];
        assert!(matches!(
            Scalars::read(Args::new(&bad), 1),
            Err(BridgeError::InvalidArgument { index: 0, .. })
        ));
    }

    #[test]
    fn errors_are_checked_in_order() {
        let thread = GlThread::spawn(FakeGl::gles2());
        let context = flushed_context(&thread);

        assert!(matches!(
            context.call("frobnicate", &[]),
            Err(BridgeError::UnknownMethod(name)) if name == "frobnicate"
        ));
        assert!(matches!(
            context.call("fenceSync", &[]),
            Err(BridgeError::Unsupported("fenceSync"))
        ));
        assert!(matches!(
            context.call("bindVertexArray", &[]),
            Err(BridgeError::RequiresWebGL2("bindVertexArray"))
        ));
        assert!(matches!(
            context.call("viewport", &[n(0), n(0)]),
            Err(BridgeError::TooFewArguments {
                method: "viewport",
                expected: 4,
                actual: 2
            })
        ));
    }

    #[test]
    fn webgl2_methods_are_rejected_before_the_first_flush() {
        let thread = GlThread::spawn(FakeGl::new());
        let context = thread.context(ContextOptions::default());
        assert!(matches!(
            context.call("createVertexArray", &[]),
            Err(BridgeError::RequiresWebGL2(_))
        ));
        context.flush_exp().unwrap();
        assert!(context.call("createVertexArray", &[]).is_ok());
    }

    #[test]
    fn scalar_calls_are_queued_in_order() {
        let thread = GlThread::spawn(FakeGl::new());
        let context = flushed_context(&thread);
        let skip = thread.gl().calls().len();

        context
            .call("clearColor", &[n(1), n(0.5), n(0), n(1)])
            .unwrap();
        context.call("enable", &[n(BLEND)]).unwrap();
        context
            .call("uniform2f", &[Value::Null, n(1), n(2)])
            .unwrap();
        context
            .call("drawArrays", &[n(TRIANGLES), n(0), n(3)])
            .unwrap();
        context.call("flushEXP", &[]).unwrap();

        assert_eq!(
            thread.gl().calls()[skip..],
            [
                "clear_color(1, 0.5, 0, 1)",
                "enable(0xbe2)",
                "uniform_fv(2, -1, [1.0, 2.0])",
                "draw_arrays(0x4, 0, 3)",
            ]
        );
        assert_eq!(
            context.call("isEnabled", &[n(BLEND)]).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn create_calls_return_ids_immediately() {
        let thread = GlThread::spawn(FakeGl::new());
        let context = thread.context(ContextOptions::default());

        let texture = context.call("createTexture", &[]).unwrap();
        let Value::Number(raw) = texture else {
            panic!("expected an id, got {texture:?}");
        };
        assert!(raw >= 1.0);
        assert_eq!(
            context.call("isTexture", &[texture.clone()]).unwrap(),
            Value::Bool(true)
        );
        context.call("deleteTexture", &[texture.clone()]).unwrap();
        assert_eq!(
            context.call("isTexture", &[texture]).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(thread.gl().live_textures(), 0);
    }

    #[test]
    fn buffer_round_trip_through_the_wire() {
        let thread = GlThread::spawn(FakeGl::new());
        let context = thread.context(ContextOptions::default());

        let buffer = context.call("createBuffer", &[]).unwrap();
        context
            .call("bindBuffer", &[n(ARRAY_BUFFER), buffer])
            .unwrap();
        let data = TypedArray::from_u8(&[1, 2, 3, 4, 5]);
        context
            .call(
                "bufferData",
                &[n(ARRAY_BUFFER), data.into(), n(STATIC_DRAW)],
            )
            .unwrap();
        assert_eq!(
            context
                .call("getBufferParameter", &[n(ARRAY_BUFFER), n(BUFFER_SIZE)])
                .unwrap(),
            n(5)
        );

        context
            .call("bufferData", &[n(ARRAY_BUFFER), n(64), n(STATIC_DRAW)])
            .unwrap();
        assert_eq!(
            context
                .call("getBufferParameter", &[n(ARRAY_BUFFER), n(BUFFER_SIZE)])
                .unwrap(),
            n(64)
        );
    }

    #[test]
    fn read_pixels_returns_an_array_of_the_destination_kind() {
        let thread = GlThread::spawn(FakeGl::new());
        let context = thread.context(ContextOptions::default());

        let texture = context.call("createTexture", &[]).unwrap();
        context
            .call("bindTexture", &[n(TEXTURE_2D), texture.clone()])
            .unwrap();
        context
            .call(
                "texImage2D",
                &[
                    n(TEXTURE_2D),
                    n(0),
                    n(RGBA),
                    n(1),
                    n(1),
                    n(0),
                    n(RGBA),
                    n(UNSIGNED_BYTE),
                    Value::Null,
                ],
            )
            .unwrap();
        let framebuffer = context.call("createFramebuffer", &[]).unwrap();
        context
            .call("bindFramebuffer", &[n(FRAMEBUFFER), framebuffer])
            .unwrap();
        context
            .call(
                "framebufferTexture2D",
                &[
                    n(FRAMEBUFFER),
                    n(COLOR_ATTACHMENT0),
                    n(TEXTURE_2D),
                    texture,
                    n(0),
                ],
            )
            .unwrap();
        context
            .call("clearColor", &[n(1), n(0), n(0), n(1)])
            .unwrap();
        context.call("clear", &[n(COLOR_BUFFER_BIT)]).unwrap();

        let destination = Value::from(TypedArray::from_u8(&[0; 4]));
        let pixels = context
            .call(
                "readPixels",
                &[
                    n(0),
                    n(0),
                    n(1),
                    n(1),
                    n(RGBA),
                    n(UNSIGNED_BYTE),
                    destination,
                ],
            )
            .unwrap();
        assert_eq!(pixels, TypedArray::from_u8(&[255, 0, 0, 255]).into());
    }

    #[test]
    fn tex_image_rejects_unusable_pixel_sources() {
        let thread = GlThread::spawn(FakeGl::new());
        let context = thread.context(ContextOptions::default());
        let six = |source: Value| {
            context.call(
                "texImage2D",
                &[
                    n(TEXTURE_2D),
                    n(0),
                    n(RGBA),
                    n(RGBA),
                    n(UNSIGNED_BYTE),
                    source,
                ],
            )
        };

        assert!(matches!(
            six(TypedArray::from_u8(&[0; 4]).into()),
            Err(BridgeError::InvalidPixelData)
        ));
        assert!(matches!(six(n(3)), Err(BridgeError::InvalidPixelData)));
        assert!(matches!(
            six(Value::object([("localUri", "https://example.com/a.png".into())])),
            Err(BridgeError::InvalidUri(_))
        ));
        assert!(six(Value::Null).is_ok());
    }

    #[test]
    fn uniform_vectors_and_vertex_attribs() {
        let thread = GlThread::spawn(FakeGl::new());
        let context = thread.context(ContextOptions::default());
        let skip = {
            context.flush_exp().unwrap();
            thread.gl().calls().len()
        };

        context
            .call(
                "uniform3fv",
                &[n(0), TypedArray::from_f32(&[1.0, 2.0, 3.0]).into()],
            )
            .unwrap();
        context
            .call(
                "uniformMatrix2fv",
                &[
                    n(1),
                    Value::Bool(false),
                    Value::Array(vec![n(1), n(0), n(0), n(1)]),
                ],
            )
            .unwrap();
        context
            .call("vertexAttrib2fv", &[n(3), Value::Array(vec![n(5), n(6)])])
            .unwrap();
        context.call("flushEXP", &[]).unwrap();

        assert_eq!(
            thread.gl().calls()[skip..],
            [
                "uniform_fv(3, 0, [1.0, 2.0, 3.0])",
                "uniform_matrix_fv(2, 1, false, [1.0, 0.0, 0.0, 1.0])",
                "vertex_attrib_4f(3, 5, 6, 0, 1)",
            ]
        );
    }

    #[test]
    fn query_results_read_null_until_available() {
        let thread = GlThread::spawn(FakeGl::new());
        let context = flushed_context(&thread);

        let query = context.call("createQuery", &[]).unwrap();
        context
            .call("beginQuery", &[n(ANY_SAMPLES_PASSED), query.clone()])
            .unwrap();
        assert_eq!(
            context
                .call("getQueryParameter", &[query.clone(), n(QUERY_RESULT)])
                .unwrap(),
            Value::Null
        );
        context.call("endQuery", &[n(ANY_SAMPLES_PASSED)]).unwrap();
        assert_eq!(
            context
                .call("getQueryParameter", &[query, n(QUERY_RESULT)])
                .unwrap(),
            n(1)
        );
    }

    #[test]
    fn extensions_and_context_information() {
        let thread = GlThread::spawn(FakeGl::new());
        let context = thread.context(ContextOptions::default());

        assert_eq!(
            context.call("getSupportedExtensions", &[]).unwrap(),
            Value::Array(Vec::new())
        );
        assert_eq!(
            context.call("getExtension", &[n(0)]).unwrap(),
            Value::Null
        );
        assert_eq!(
            context.call("isContextLost", &[]).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            context
                .call("getContextAttributes", &[])
                .unwrap()
                .field("stencil"),
            Some(&Value::Bool(false))
        );
        assert!(is_known_method("getUniform"));
        assert!(!is_known_method("getUniformz"));
    }
}
