//! In-memory stand-ins for the native window, dialogs, opener and probe.

use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use studio_common::{Endpoint, PlatformError, ShellError};
use studio_platform::ExternalOpener;
use studio_webview::IpcReply;
use url::Url;

use crate::bridge::{DialogService, OpenDialogOptions, SaveDialogOptions};
use crate::readiness::{Probe, ProbeFailure};
use crate::window::{Surface, SurfaceFactory, SurfaceSpec};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Navigate(String),
    Reveal,
    Focus,
    Minimize,
    SetMaximized(bool),
    OpenDevtools,
    SetTitle(String),
    Deliver(IpcReply),
    Close,
}

type CallLog = Rc<RefCell<Vec<SurfaceCall>>>;

pub struct FakeSurface {
    calls: CallLog,
    live: Rc<Cell<usize>>,
    maximized: bool,
}

impl Surface for FakeSurface {
    fn navigate(&mut self, url: &str) -> Result<(), ShellError> {
        self.calls.borrow_mut().push(SurfaceCall::Navigate(url.into()));
        Ok(())
    }

    fn reveal(&mut self) {
        self.calls.borrow_mut().push(SurfaceCall::Reveal);
    }

    fn focus(&mut self) {
        self.calls.borrow_mut().push(SurfaceCall::Focus);
    }

    fn minimize(&mut self) {
        self.calls.borrow_mut().push(SurfaceCall::Minimize);
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
        self.calls
            .borrow_mut()
            .push(SurfaceCall::SetMaximized(maximized));
    }

    fn open_devtools(&mut self) {
        self.calls.borrow_mut().push(SurfaceCall::OpenDevtools);
    }

    fn set_title(&mut self, title: &str) {
        self.calls.borrow_mut().push(SurfaceCall::SetTitle(title.into()));
    }

    fn deliver(&mut self, reply: &IpcReply) -> Result<(), ShellError> {
        self.calls
            .borrow_mut()
            .push(SurfaceCall::Deliver(reply.clone()));
        Ok(())
    }

    fn close(&mut self) {
        self.calls.borrow_mut().push(SurfaceCall::Close);
    }
}

impl Drop for FakeSurface {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

/// Counts live surfaces and remembers the most that were ever alive at once.
#[derive(Default)]
pub struct FakeFactory {
    pub(crate) calls: CallLog,
    pub(crate) live: Rc<Cell<usize>>,
    pub(crate) peak: usize,
    pub(crate) created: usize,
    pub fail: bool,
}

impl FakeFactory {
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }

    pub fn peak(&self) -> usize {
        self.peak
    }

    pub fn created(&self) -> usize {
        self.created
    }
}

impl SurfaceFactory for FakeFactory {
    type Surface = FakeSurface;

    fn create_surface(&mut self, _spec: &SurfaceSpec) -> Result<FakeSurface, ShellError> {
        if self.fail {
            return Err(ShellError::Window("display unavailable".into()));
        }
        self.created += 1;
        self.live.set(self.live.get() + 1);
        self.peak = self.peak.max(self.live.get());
        Ok(FakeSurface {
            calls: Rc::clone(&self.calls),
            live: Rc::clone(&self.live),
            maximized: false,
        })
    }
}

/// Fails until `succeed_at`, counting every call.
pub struct ScriptedProbe {
    calls: AtomicU32,
    succeed_at: Option<u32>,
    hang: bool,
}

impl ScriptedProbe {
    pub fn failing() -> Self {
        Self {
            calls: AtomicU32::new(0),
            succeed_at: None,
            hang: false,
        }
    }

    pub fn succeeding_at(k: u32) -> Self {
        Self {
            succeed_at: Some(k),
            ..Self::failing()
        }
    }

    pub fn hanging() -> Self {
        Self {
            hang: true,
            ..Self::failing()
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Probe for ScriptedProbe {
    async fn probe(&self, _endpoint: &Endpoint) -> Result<(), ProbeFailure> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.hang {
            std::future::pending::<()>().await;
        }
        match self.succeed_at {
            Some(k) if n >= k => Ok(()),
            _ => Err(ProbeFailure::Unreachable("connection refused".into())),
        }
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    pub(crate) opened: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, url: &Url) -> Result<(), PlatformError> {
        if self.fail {
            return Err(PlatformError::ExternalOpen("no handler".into()));
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Dialogs that answer immediately with a fixed outcome (`None` = cancelled).
#[derive(Default)]
pub struct ScriptedDialogs {
    pub open: Option<Vec<PathBuf>>,
    pub save: Option<PathBuf>,
    pub seen_open: RefCell<Vec<OpenDialogOptions>>,
}

impl DialogService<FakeSurface> for ScriptedDialogs {
    fn open(
        &self,
        _parent: &FakeSurface,
        options: &OpenDialogOptions,
    ) -> BoxFuture<'static, Option<Vec<PathBuf>>> {
        self.seen_open.borrow_mut().push(options.clone());
        let outcome = self.open.clone();
        Box::pin(async move { outcome })
    }

    fn save(
        &self,
        _parent: &FakeSurface,
        _options: &SaveDialogOptions,
    ) -> BoxFuture<'static, Option<PathBuf>> {
        let outcome = self.save.clone();
        Box::pin(async move { outcome })
    }
}
