//! 对象缓存层
//!
//! 通过插件注册表选择后端（moka 内存缓存 / redis），
//! JWT 中间件用它缓存 token 对应的用户信息。

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存插件
///
/// 在模块加载时（ctor）将构造函数注册到全局注册表，
/// 运行时根据配置中的 cache.type 字段选择。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $cache_type:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            let constructor: $crate::cache::register::ObjectCacheConstructor =
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$cache_type>::new()
                            .map_err($crate::errors::ClassroomError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                });
            $crate::cache::register::register_object_cache_plugin($name, constructor);
        }
    };
}
