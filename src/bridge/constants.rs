//! ### English
//! GL enum values the bridge inspects, plus the WebGL-only enums that have no GLES counterpart.
//!
//! ### 中文
//! 桥接层需要识别的 GL 枚举值，以及 GLES 中不存在的 WebGL 专有枚举。

use gleam::gl::GLenum;

pub const NO_ERROR: GLenum = 0;

// Clear masks.
pub const DEPTH_BUFFER_BIT: GLenum = 0x0100;
pub const STENCIL_BUFFER_BIT: GLenum = 0x0400;
pub const COLOR_BUFFER_BIT: GLenum = 0x4000;

// Primitives.
pub const POINTS: GLenum = 0x0000;
pub const TRIANGLES: GLenum = 0x0004;

// Data types.
pub const BYTE: GLenum = 0x1400;
pub const UNSIGNED_BYTE: GLenum = 0x1401;
pub const SHORT: GLenum = 0x1402;
pub const UNSIGNED_SHORT: GLenum = 0x1403;
pub const INT: GLenum = 0x1404;
pub const UNSIGNED_INT: GLenum = 0x1405;
pub const FLOAT: GLenum = 0x1406;
pub const HALF_FLOAT: GLenum = 0x140B;
pub const UNSIGNED_SHORT_4_4_4_4: GLenum = 0x8033;
pub const UNSIGNED_SHORT_5_5_5_1: GLenum = 0x8034;
pub const UNSIGNED_SHORT_5_6_5: GLenum = 0x8363;
pub const UNSIGNED_INT_2_10_10_10_REV: GLenum = 0x8368;
pub const UNSIGNED_INT_24_8: GLenum = 0x84FA;
pub const UNSIGNED_INT_10F_11F_11F_REV: GLenum = 0x8C3B;
pub const UNSIGNED_INT_5_9_9_9_REV: GLenum = 0x8C3E;
pub const HALF_FLOAT_OES: GLenum = 0x8D61;
pub const FLOAT_32_UNSIGNED_INT_24_8_REV: GLenum = 0x8DAD;

// Pixel formats.
pub const DEPTH_COMPONENT: GLenum = 0x1902;
pub const RED: GLenum = 0x1903;
pub const ALPHA: GLenum = 0x1906;
pub const RGB: GLenum = 0x1907;
pub const RGBA: GLenum = 0x1908;
pub const LUMINANCE: GLenum = 0x1909;
pub const LUMINANCE_ALPHA: GLenum = 0x190A;
pub const RG: GLenum = 0x8227;
pub const RG_INTEGER: GLenum = 0x8228;
pub const RED_INTEGER: GLenum = 0x8D94;
pub const RGB_INTEGER: GLenum = 0x8D98;
pub const RGBA_INTEGER: GLenum = 0x8D99;

// Buffers.
pub const ARRAY_BUFFER: GLenum = 0x8892;
pub const ELEMENT_ARRAY_BUFFER: GLenum = 0x8893;
pub const ARRAY_BUFFER_BINDING: GLenum = 0x8894;
pub const ELEMENT_ARRAY_BUFFER_BINDING: GLenum = 0x8895;
pub const BUFFER_SIZE: GLenum = 0x8764;
pub const BUFFER_USAGE: GLenum = 0x8765;
pub const STATIC_DRAW: GLenum = 0x88E4;
pub const UNIFORM_BUFFER: GLenum = 0x8A11;
pub const INVALID_INDEX: GLenum = 0xFFFF_FFFF;

// Textures.
pub const TEXTURE: GLenum = 0x1702;
pub const TEXTURE_2D: GLenum = 0x0DE1;
pub const TEXTURE_3D: GLenum = 0x806F;
pub const TEXTURE_2D_ARRAY: GLenum = 0x8C1A;
pub const TEXTURE_CUBE_MAP: GLenum = 0x8513;
pub const TEXTURE_BINDING_2D: GLenum = 0x8069;
pub const TEXTURE_BINDING_3D: GLenum = 0x806A;
pub const TEXTURE_BINDING_2D_ARRAY: GLenum = 0x8C1D;
pub const TEXTURE_BINDING_CUBE_MAP: GLenum = 0x8514;
pub const TEXTURE_MAG_FILTER: GLenum = 0x2800;
pub const TEXTURE_MIN_FILTER: GLenum = 0x2801;
pub const TEXTURE_MIN_LOD: GLenum = 0x813A;
pub const TEXTURE_MAX_LOD: GLenum = 0x813B;
pub const NEAREST: GLenum = 0x2600;
pub const TEXTURE0: GLenum = 0x84C0;

// Framebuffers and renderbuffers.
pub const FRAMEBUFFER: GLenum = 0x8D40;
pub const READ_FRAMEBUFFER: GLenum = 0x8CA8;
pub const DRAW_FRAMEBUFFER: GLenum = 0x8CA9;
pub const RENDERBUFFER: GLenum = 0x8D41;
pub const FRAMEBUFFER_COMPLETE: GLenum = 0x8CD5;
pub const FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT: GLenum = 0x8CD7;
pub const FRAMEBUFFER_UNDEFINED: GLenum = 0x8219;
pub const COLOR_ATTACHMENT0: GLenum = 0x8CE0;
pub const DEPTH_ATTACHMENT: GLenum = 0x8D00;
pub const FRAMEBUFFER_ATTACHMENT_OBJECT_TYPE: GLenum = 0x8CD0;
pub const FRAMEBUFFER_ATTACHMENT_OBJECT_NAME: GLenum = 0x8CD1;
pub const RENDERBUFFER_WIDTH: GLenum = 0x8D42;
pub const RENDERBUFFER_HEIGHT: GLenum = 0x8D43;
pub const RGBA4: GLenum = 0x8056;

// Programs and shaders.
pub const FRAGMENT_SHADER: GLenum = 0x8B30;
pub const VERTEX_SHADER: GLenum = 0x8B31;
pub const SHADER_TYPE: GLenum = 0x8B4F;
pub const DELETE_STATUS: GLenum = 0x8B80;
pub const COMPILE_STATUS: GLenum = 0x8B81;
pub const LINK_STATUS: GLenum = 0x8B82;
pub const VALIDATE_STATUS: GLenum = 0x8B83;
pub const ATTACHED_SHADERS: GLenum = 0x8B85;
pub const ACTIVE_UNIFORMS: GLenum = 0x8B86;
pub const ACTIVE_ATTRIBUTES: GLenum = 0x8B89;
pub const CURRENT_PROGRAM: GLenum = 0x8B8D;
pub const LOW_FLOAT: GLenum = 0x8DF0;
pub const HIGH_FLOAT: GLenum = 0x8DF2;
pub const FLOAT_VEC4: GLenum = 0x8B52;

// Queries.
pub const ANY_SAMPLES_PASSED: GLenum = 0x8C2F;
pub const QUERY_RESULT: GLenum = 0x8866;
pub const QUERY_RESULT_AVAILABLE: GLenum = 0x8867;

// Capabilities.
pub const BLEND: GLenum = 0x0BE2;
pub const DEPTH_TEST: GLenum = 0x0B71;

// getParameter names.
pub const LINE_WIDTH: GLenum = 0x0B21;
pub const ALIASED_POINT_SIZE_RANGE: GLenum = 0x846D;
pub const ALIASED_LINE_WIDTH_RANGE: GLenum = 0x846E;
pub const DEPTH_RANGE: GLenum = 0x0B70;
pub const DEPTH_CLEAR_VALUE: GLenum = 0x0B73;
pub const VIEWPORT: GLenum = 0x0BA2;
pub const SCISSOR_BOX: GLenum = 0x0C10;
pub const COLOR_CLEAR_VALUE: GLenum = 0x0C22;
pub const COLOR_WRITEMASK: GLenum = 0x0C23;
pub const UNPACK_ROW_LENGTH: GLenum = 0x0CF2;
pub const UNPACK_SKIP_ROWS: GLenum = 0x0CF3;
pub const UNPACK_SKIP_PIXELS: GLenum = 0x0CF4;
pub const UNPACK_ALIGNMENT: GLenum = 0x0CF5;
pub const PACK_ROW_LENGTH: GLenum = 0x0D02;
pub const PACK_SKIP_ROWS: GLenum = 0x0D03;
pub const PACK_SKIP_PIXELS: GLenum = 0x0D04;
pub const PACK_ALIGNMENT: GLenum = 0x0D05;
pub const UNPACK_SKIP_IMAGES: GLenum = 0x806D;
pub const UNPACK_IMAGE_HEIGHT: GLenum = 0x806E;
pub const MAX_TEXTURE_SIZE: GLenum = 0x0D33;
pub const MAX_VIEWPORT_DIMS: GLenum = 0x0D3A;
pub const POLYGON_OFFSET_UNITS: GLenum = 0x2A00;
pub const POLYGON_OFFSET_FACTOR: GLenum = 0x8038;
pub const BLEND_COLOR: GLenum = 0x8005;
pub const SAMPLE_ALPHA_TO_COVERAGE: GLenum = 0x809E;
pub const SAMPLE_COVERAGE: GLenum = 0x80A0;
pub const SAMPLE_COVERAGE_VALUE: GLenum = 0x80AA;
pub const MAX_TEXTURE_LOD_BIAS: GLenum = 0x84FD;
pub const COMPRESSED_TEXTURE_FORMATS: GLenum = 0x86A3;
pub const RASTERIZER_DISCARD: GLenum = 0x8C89;
pub const TRANSFORM_FEEDBACK_PAUSED: GLenum = 0x8E23;
pub const TRANSFORM_FEEDBACK_ACTIVE: GLenum = 0x8E24;
pub const VENDOR: GLenum = 0x1F00;
pub const RENDERER: GLenum = 0x1F01;
pub const VERSION: GLenum = 0x1F02;
pub const SHADING_LANGUAGE_VERSION: GLenum = 0x8B8C;

// Binding queries the bridge does not answer.
pub const FRAMEBUFFER_BINDING: GLenum = 0x8CA6;
pub const RENDERBUFFER_BINDING: GLenum = 0x8CA7;
pub const READ_FRAMEBUFFER_BINDING: GLenum = 0x8CAA;
pub const COPY_READ_BUFFER_BINDING: GLenum = 0x8F36;
pub const COPY_WRITE_BUFFER_BINDING: GLenum = 0x8F37;
pub const SAMPLER_BINDING: GLenum = 0x8919;
pub const TRANSFORM_FEEDBACK_BINDING: GLenum = 0x8E25;
pub const TRANSFORM_FEEDBACK_BUFFER_BINDING: GLenum = 0x8C8F;
pub const UNIFORM_BUFFER_BINDING: GLenum = 0x8A28;
pub const VERTEX_ARRAY_BINDING: GLenum = 0x85B5;

// WebGL-only.
pub const DEPTH_STENCIL: GLenum = 0x84F9;
pub const DEPTH_STENCIL_ATTACHMENT: GLenum = 0x821A;
pub const UNPACK_FLIP_Y_WEBGL: GLenum = 0x9240;
pub const UNPACK_PREMULTIPLY_ALPHA_WEBGL: GLenum = 0x9241;
pub const CONTEXT_LOST_WEBGL: GLenum = 0x9242;
pub const UNPACK_COLORSPACE_CONVERSION_WEBGL: GLenum = 0x9243;
pub const BROWSER_DEFAULT_WEBGL: GLenum = 0x9244;
pub const MAX_CLIENT_WAIT_TIMEOUT_WEBGL: GLenum = 0x9247;
