//! 外部协作者挂钩
//!
//! `/process` 和 `/run-first` 背后的实际工作不属于本服务，
//! 通过 trait 注入，默认实现只记录日志。

use anyhow::Result;

/// `/process` 背后的批处理
pub trait Processor: Send + Sync {
    fn process(&self) -> Result<()>;
}

/// `/run-first` 调用的外部脚本入口
pub trait EntryPoint: Send + Sync {
    fn run(&self) -> Result<()>;
}

/// 默认处理器，不做任何工作
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProcessor;

impl Processor for NoopProcessor {
    fn process(&self) -> Result<()> {
        tracing::debug!("处理器未配置实际任务");
        Ok(())
    }
}

/// 默认入口，不做任何工作
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEntryPoint;

impl EntryPoint for NoopEntryPoint {
    fn run(&self) -> Result<()> {
        tracing::debug!("外部脚本入口未配置");
        Ok(())
    }
}
